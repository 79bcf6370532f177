//! Boxel origins packed into 64-bit system identifiers.
//!
//! An id64 stores the boxel a system lives in as three bit fields above a
//! 3-bit mass code:
//!
//! ```text
//!   bits 0..3              masscode m
//!   bits 3..17-m           z (14 - m bits)
//!   bits 17-m..30-2m       y (13 - m bits)
//!   bits 30-2m..44-3m      x (14 - m bits)
//! ```
//!
//! Higher mass codes drop `m` low-order bits per axis, so the restored
//! coordinate is a multiple of `2^m` grid units.

use serde::Serialize;

/// Galactic x of the boxel grid's lower corner, in light years.
pub const X0: f64 = -49985.0;
/// Galactic y of the boxel grid's lower corner, in light years.
pub const Y0: f64 = -40985.0;
/// Galactic z of the boxel grid's lower corner, in light years.
pub const Z0: f64 = -24105.0;

/// Edge length of a masscode-0 boxel, in light years.
const BOXEL_UNIT: f64 = 10.0;

const WIDE_FIELD: u64 = 0x3FFF;
const NARROW_FIELD: u64 = 0x1FFF;

/// Lower corner of a boxel in galactic coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Origin {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Origin {
    /// Corner of the whole boxel grid, which is also the origin of every
    /// boxel whose fields are all zero.
    pub const GRID: Origin = Origin {
        x: X0,
        y: Y0,
        z: Z0,
    };
}

/// Extract the 3-bit mass code.
#[must_use]
pub const fn masscode(id: u64) -> u8 {
    (id & 7) as u8
}

/// Decode the boxel origin encoded in `id`.
///
/// Every input decodes; identifiers that did not come from the real encoder
/// produce well-defined but meaningless coordinates.
#[must_use]
pub const fn decode_boxel(id: u64) -> Origin {
    let m = id & 7;

    let z = ((id >> 3) & (WIDE_FIELD >> m)) << m;
    let y = ((id >> (17 - m)) & (NARROW_FIELD >> m)) << m;
    let x = ((id >> (30 - 2 * m)) & (WIDE_FIELD >> m)) << m;

    Origin {
        x: x as f64 * BOXEL_UNIT + X0,
        y: y as f64 * BOXEL_UNIT + Y0,
        z: z as f64 * BOXEL_UNIT + Z0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pack fields the way the encoder does.
    fn pack(m: u64, x: u64, y: u64, z: u64) -> u64 {
        m | (z << 3) | (y << (17 - m)) | (x << (30 - 2 * m))
    }

    #[test]
    fn test_zero_id_is_grid_origin() {
        assert_eq!(decode_boxel(0), Origin::GRID);
        assert_eq!(
            decode_boxel(0),
            Origin {
                x: -49985.0,
                y: -40985.0,
                z: -24105.0
            }
        );
    }

    #[test]
    fn test_masscode_only_ids_decode_to_grid_origin() {
        for m in 0..8u64 {
            assert_eq!(masscode(m), m as u8);
            assert_eq!(decode_boxel(m), Origin::GRID, "masscode {m}");
        }
    }

    #[test]
    fn test_known_systems() {
        // Sol, masscode 3 (80 ly boxel)
        let sol = decode_boxel(10_477_373_803);
        assert_eq!(masscode(10_477_373_803), 3);
        assert_eq!(
            sol,
            Origin {
                x: -65.0,
                y: -25.0,
                z: -25.0
            }
        );

        // Sagittarius A*, masscode 6
        let sgr = decode_boxel(20_578_934);
        assert_eq!(masscode(20_578_934), 6);
        assert_eq!(
            sgr,
            Origin {
                x: -65.0,
                y: -25.0,
                z: 25815.0
            }
        );
    }

    #[test]
    fn test_field_widths() {
        // z and x carry 14 - m bits, y carries 13 - m
        let top = decode_boxel(pack(0, 0x3FFF, 0x1FFF, 0x3FFF));
        assert_eq!(top.x, 16383.0 * 10.0 + X0);
        assert_eq!(top.y, 8191.0 * 10.0 + Y0);
        assert_eq!(top.z, 16383.0 * 10.0 + Z0);

        let coarse = decode_boxel(pack(7, 0x7F, 0x3F, 0x7F));
        assert_eq!(coarse.x, (0x7F << 7) as f64 * 10.0 + X0);
        assert_eq!(coarse.y, (0x3F << 7) as f64 * 10.0 + Y0);
        assert_eq!(coarse.z, (0x7F << 7) as f64 * 10.0 + Z0);
    }

    #[test]
    fn test_fields_are_independent() {
        for m in 0..8u64 {
            let only_x = decode_boxel(pack(m, 1, 0, 0));
            assert_eq!(only_x.x, (1u64 << m) as f64 * 10.0 + X0);
            assert_eq!(only_x.y, Y0);
            assert_eq!(only_x.z, Z0);

            let only_y = decode_boxel(pack(m, 0, 1, 0));
            assert_eq!(only_y.x, X0);
            assert_eq!(only_y.y, (1u64 << m) as f64 * 10.0 + Y0);
            assert_eq!(only_y.z, Z0);

            let only_z = decode_boxel(pack(m, 0, 0, 1));
            assert_eq!(only_z.x, X0);
            assert_eq!(only_z.y, Y0);
            assert_eq!(only_z.z, (1u64 << m) as f64 * 10.0 + Z0);
        }
    }

    #[test]
    fn test_high_bits_ignored() {
        // bits above the x field (body id etc.) never move the origin
        let id = 10_477_373_803;
        assert_eq!(decode_boxel(id | (0xFFFF << 48)), decode_boxel(id));
        let _ = decode_boxel(u64::MAX);
    }
}
