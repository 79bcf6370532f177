use std::{collections::HashSet, env, fs, path::PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use serde::Deserialize;

/// Named region entry from the map file
#[derive(Debug, Deserialize)]
struct RegionInfo {
    id: u16,
    name: String,
}

/// Region map file: name table plus one RLE row per quantized z
#[derive(Debug, Deserialize)]
struct MapInfo {
    width: u32,
    regions: Vec<RegionInfo>,
    rows: Vec<Vec<(u16, u16)>>,
}

/// Reject any static-data inconsistency at build time so lookups never hit a
/// name-table miss at runtime.
fn validate(map: &MapInfo) {
    let mut known = HashSet::new();
    for region in &map.regions {
        assert!(region.id != 0, "region id 0 is reserved for unmapped cells");
        assert!(
            known.insert(region.id),
            "duplicate region id {} in name table",
            region.id
        );
    }

    for (z, row) in map.rows.iter().enumerate() {
        let mut span = 0u32;
        for (i, &(len, id)) in row.iter().enumerate() {
            assert!(len > 0, "row {z} run {i} has zero length");
            assert!(
                id == 0 || known.contains(&id),
                "row {z} run {i} references unknown region {id}"
            );
            span += u32::from(len);
        }
        assert!(
            span == map.width,
            "row {z} spans {span} cells, expected {}",
            map.width
        );
    }
}

fn generate_map_module(map: &MapInfo) -> String {
    let width = map.width;
    let row_count = map.rows.len();

    let names: Vec<TokenStream> = map
        .regions
        .iter()
        .map(|r| {
            let id = r.id;
            let name = r.name.as_str();
            quote! { (RegionId(#id), #name) }
        })
        .collect();

    let rows: Vec<TokenStream> = map
        .rows
        .iter()
        .map(|row| {
            let runs = row.iter().map(|&(len, id)| quote! { Run::new(#len, RegionId(#id)) });
            quote! { &[#(#runs),*] }
        })
        .collect();

    let output = quote! {
        use crate::grid::Run;
        use crate::region::RegionId;

        /// Column count of every embedded row
        pub(crate) const REGION_MAP_WIDTH: u32 = #width;

        /// Named regions, id 0 excluded
        pub(crate) static REGION_NAMES: &[(RegionId, &str)] = &[#(#names),*];

        /// RLE rows indexed by quantized z
        pub(crate) static REGION_ROWS: [&[Run]; #row_count] = [#(#rows),*];
    };

    prettyplease::unparse(&syn::parse2(output).expect("failed to parse region map module"))
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    println!("cargo:rerun-if-changed=data/region-map.json");

    let map_json = fs::read_to_string(manifest_dir.join("data/region-map.json"))
        .expect("failed to read region-map.json");
    let map: MapInfo = serde_json::from_str(&map_json).expect("failed to parse region-map.json");

    validate(&map);

    let content = generate_map_module(&map);
    fs::write(out_dir.join("region_map.rs"), content).expect("failed to write region map module");
}
