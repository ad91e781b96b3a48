use invaders_common::Sprite;

/// Axis-aligned bounding-box test between two sprites placed at (`xa`, `ya`)
/// and (`xb`, `yb`).
///
/// Only the bounding boxes are compared; transparent cells in a sprite's
/// corners still count as solid.
pub fn overlaps(a: &Sprite, xa: i32, ya: i32, b: &Sprite, xb: i32, yb: i32) -> bool {
    let (wa, ha) = (a.width() as i32, a.height() as i32);
    let (wb, hb) = (b.width() as i32, b.height() as i32);
    xa < xb + wb && xa + wa > xb && ya < yb + hb && ya + ha > yb
}

#[cfg(test)]
mod tests {
    use super::overlaps;
    use invaders_common::Sprite;

    #[test]
    fn bullet_inside_alien_box_overlaps() {
        let bullet = Sprite::solid(1, 3);
        let alien = Sprite::solid(11, 8);
        assert!(overlaps(&bullet, 25, 126, &alien, 20, 128));
        assert!(overlaps(&bullet, 30, 135, &alien, 20, 128));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Sprite::solid(4, 4);
        let b = Sprite::solid(4, 4);
        // xa + wa == xb
        assert!(!overlaps(&a, 0, 0, &b, 4, 0));
        // ya + ha == yb
        assert!(!overlaps(&a, 0, 0, &b, 0, 4));
        assert!(overlaps(&a, 0, 0, &b, 3, 3));
    }

    #[test]
    fn overlap_is_symmetric() {
        let a = Sprite::solid(3, 5);
        let b = Sprite::solid(7, 2);
        for xb in -8..8 {
            for yb in -8..8 {
                assert_eq!(
                    overlaps(&a, 0, 0, &b, xb, yb),
                    overlaps(&b, xb, yb, &a, 0, 0),
                    "asymmetric at ({}, {})",
                    xb,
                    yb
                );
            }
        }
    }

    #[test]
    fn transparent_corners_still_collide() {
        let hollow = Sprite::new(3, 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]);
        let dot = Sprite::solid(1, 1);
        assert!(overlaps(&dot, 0, 0, &hollow, 0, 0));
    }
}
