use crate::PuzzleSession;

/// Everything the presentation layer needs to draw one slot.
#[derive(Clone, Debug, PartialEq)]
pub struct TileView {
    pub slot: usize,
    pub canonical_index: usize,
    pub width_px: f64,
    pub height_px: f64,
    pub background_size: String,
    pub background_position: String,
}

/// Project the board into display order. Rebuilt after every mutation.
pub fn tile_views(session: &PuzzleSession) -> Vec<TileView> {
    let image = session.image();
    session
        .board()
        .tiles()
        .iter()
        .map(|tile| {
            let offset = tile.offset();
            let (_, _, width_px, height_px) = offset.pixel_rect(image.width(), image.height());
            TileView {
                slot: tile.current_slot(),
                canonical_index: tile.canonical_index(),
                width_px,
                height_px,
                background_size: offset.css_background_size(),
                background_position: offset.css_background_position(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Image;

    #[test]
    fn views_follow_slot_order() {
        let image = Image::new("data:", 800, 600).unwrap();
        let session = PuzzleSession::new(image, 2, 4, 21).unwrap();
        let views = tile_views(&session);
        assert_eq!(views.len(), 8);
        for (i, v) in views.iter().enumerate() {
            assert_eq!(v.slot, i);
            assert_eq!(v.canonical_index, session.board().order()[i]);
            assert_eq!((v.width_px, v.height_px), (200.0, 300.0));
            assert_eq!(v.background_size, "400% 200%");
        }
    }

    #[test]
    fn uneven_image_splits_into_fractional_tiles() {
        let image = Image::new("data:", 100, 50).unwrap();
        let session = PuzzleSession::new(image, 4, 3, 2).unwrap();
        for v in tile_views(&session) {
            assert!((v.width_px - 100.0 / 3.0).abs() < 1e-9);
            assert_eq!(v.height_px, 12.5);
        }
    }

    #[test]
    fn position_tracks_canonical_tile() {
        let image = Image::new("data:", 100, 100).unwrap();
        let mut session = PuzzleSession::new(image, 2, 2, 5).unwrap();
        let (slot, home) = session.board().first_misplaced().unwrap();
        session.swap(slot, home);
        let views = tile_views(&session);
        let v = &views[home];
        assert_eq!(v.canonical_index, home);
        let expected = match home {
            0 => "0% 0%",
            1 => "100% 0%",
            2 => "0% 100%",
            _ => "100% 100%",
        };
        assert_eq!(v.background_position, expected);
    }
}
