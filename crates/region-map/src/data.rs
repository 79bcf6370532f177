// Generated from data/region-map.json by build.rs
include!(concat!(env!("OUT_DIR"), "/region_map.rs"));
