//! Recovery of the two source layers from a composed raster.

use crate::codec::{undark, unlight};
use crate::types::{DualRaster, GrayRaster};

/// Split a composed lightness + alpha raster back into its two layers.
///
/// Inverts the merge step: `bottom = trunc(lightness / 255 * alpha)`,
/// `top = 255 - alpha + bottom` (8-bit wraparound), then the half-range
/// shifts are undone. No validity check is performed: a raster that did
/// not come out of [`compose_classic`](crate::compose::compose_classic)
/// produces well-defined but meaningless layers, never an error. Recovery
/// is bit-exact up to the low bit the half-range shift discards, except
/// where the division already truncated: there the bottom layer can read
/// two gray levels low, and a near-black top layer wraps to near-white.
pub fn extract(raster: &DualRaster) -> (GrayRaster, GrayRaster) {
    let planes: Vec<(Vec<u8>, Vec<u8>)> = raster
        .lightness()
        .rows()
        .iter()
        .zip(raster.alpha().rows())
        .map(|(lrow, arow)| {
            lrow.iter()
                .zip(arow)
                .map(|(&l, &a)| {
                    let bottom = (f64::from(l) / 255.0 * f64::from(a)) as u32 as u8;
                    let top = 255u8.wrapping_sub(a).wrapping_add(bottom);
                    (top, bottom)
                })
                .unzip()
        })
        .collect();

    let (top_rows, bottom_rows) = planes.into_iter().unzip();
    let top_raw = GrayRaster::new(top_rows);
    let bottom_raw = GrayRaster::new(bottom_rows);

    (unlight(&top_raw), undark(&bottom_raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose_classic;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_with_black_bottom_is_exact() {
        // a black bottom layer encodes with lightness 0 everywhere, which
        // divides evenly: the top layer comes back exactly, minus its low bit
        let top = GrayRaster::new(
            (0..16)
                .map(|y| (0..16).map(|x| (y * 16 + x) as u8).collect())
                .collect(),
        );
        let bottom = GrayRaster::filled(16, 16, 0);

        let (rec_top, rec_bottom) = extract(&compose_classic(&top, &bottom).unwrap());

        assert_eq!(rec_top, top.map(|v| v & !1));
        assert_eq!(rec_bottom, GrayRaster::filled(16, 16, 0));
    }

    #[test]
    fn test_round_trip_saturated_pair_is_exact() {
        let white = GrayRaster::filled(2, 2, 255);

        let (rec_top, rec_bottom) = extract(&compose_classic(&white, &white).unwrap());

        assert_eq!(rec_top, GrayRaster::filled(2, 2, 254));
        assert_eq!(rec_bottom, GrayRaster::filled(2, 2, 254));
    }

    #[test]
    fn test_round_trip_mixed_value_fixture() {
        let top = GrayRaster::new(vec![
            vec![0, 37, 74, 111],
            vec![148, 185, 222, 255],
            vec![13, 121, 199, 250],
            vec![2, 3, 254, 255],
        ]);
        let bottom = GrayRaster::new(vec![
            vec![255, 218, 181, 144],
            vec![107, 70, 33, 0],
            vec![250, 199, 121, 13],
            vec![254, 255, 2, 3],
        ]);

        let (rec_top, rec_bottom) = extract(&compose_classic(&top, &bottom).unwrap());

        // hand-computed expectations; note the truncation drift on the
        // bottom layer and the wraparound on the near-black top pixels
        assert_eq!(
            rec_top.rows(),
            &[
                vec![254, 34, 72, 108],
                vec![146, 182, 220, 254],
                vec![10, 118, 196, 248],
                vec![0, 0, 254, 254],
            ]
        );
        assert_eq!(
            rec_bottom.rows(),
            &[
                vec![252, 216, 178, 142],
                vec![104, 68, 30, 0],
                vec![248, 196, 118, 10],
                vec![252, 252, 2, 2],
            ]
        );
    }

    #[test]
    fn test_round_trip_error_envelope() {
        // away from the wraparound edge, recovery stays within two gray
        // levels of the low-bit-stable originals
        let top = GrayRaster::new(
            (0..8)
                .map(|y| (0..8).map(|x| 16 + (y * 8 + x) as u8 * 3).collect())
                .collect(),
        );
        let bottom = GrayRaster::new(
            (0..8)
                .map(|y| (0..8).map(|x| 255 - (y * 8 + x) as u8 * 2).collect())
                .collect(),
        );

        let (rec_top, rec_bottom) = extract(&compose_classic(&top, &bottom).unwrap());

        for y in 0..8 {
            for x in 0..8 {
                let t = i16::from(top.get(x, y).unwrap() & !1);
                let b = i16::from(bottom.get(x, y).unwrap() & !1);
                let rt = i16::from(rec_top.get(x, y).unwrap());
                let rb = i16::from(rec_bottom.get(x, y).unwrap());
                assert!((rt - t).abs() <= 2, "top ({}, {}): {} vs {}", x, y, rt, t);
                assert!((rb - b).abs() <= 2, "bottom ({}, {}): {} vs {}", x, y, rb, b);
            }
        }
    }

    #[test]
    fn test_foreign_raster_yields_defined_output() {
        // not a composed raster; output is meaningless but total
        let lightness = GrayRaster::new(vec![vec![254, 13, 99]]);
        let alpha = GrayRaster::new(vec![vec![254, 200, 1]]);
        let dual = DualRaster::new(lightness, alpha).unwrap();

        let (top, bottom) = extract(&dual);

        assert_eq!(top.size(), (3, 1));
        assert_eq!(bottom.size(), (3, 1));
    }
}
