use crate::{CaptureError, Image, PuzzleError, PuzzleSession};

/// Single-shot completion callback for a surface capture.
pub type CaptureCallback = Box<dyn FnOnce(Result<Image, CaptureError>)>;

/// Rasterizes whatever the map currently shows.
///
/// Implementations call `done` exactly once, with the image or with the
/// collaborator's error. Callers never issue overlapping requests.
pub trait SurfaceCapture {
    fn render_surface_to_image(&self, done: CaptureCallback);
}

/// Pixel size of the active view.
pub trait Viewport {
    fn current_viewport_size(&self) -> (u32, u32);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// Capture the surface and turn it into a freshly shuffled puzzle.
///
/// The viewport is sampled before the capture starts; the captured bitmap is
/// displayed at that size. Capture errors are passed through, never retried.
pub fn request_puzzle<C, V, F>(capture: &C, viewport: &V, grid: GridSize, seed: u64, done: F)
where
    C: SurfaceCapture + ?Sized,
    V: Viewport + ?Sized,
    F: FnOnce(Result<PuzzleSession, PuzzleError>) + 'static,
{
    let (width, height) = viewport.current_viewport_size();
    capture.render_surface_to_image(Box::new(move |result| {
        let session = result
            .map_err(PuzzleError::from)
            .and_then(|image| image.resized(width, height))
            .and_then(|image| PuzzleSession::new(image, grid.rows, grid.cols, seed));
        if let Err(err) = &session {
            log::error!("puzzle generation abandoned: {err}");
        }
        done(session);
    }));
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    struct FixedCapture(Result<Image, CaptureError>);

    impl SurfaceCapture for FixedCapture {
        fn render_surface_to_image(&self, done: CaptureCallback) {
            done(self.0.clone());
        }
    }

    struct FixedViewport(u32, u32);

    impl Viewport for FixedViewport {
        fn current_viewport_size(&self) -> (u32, u32) {
            (self.0, self.1)
        }
    }

    const GRID: GridSize = GridSize { rows: 4, cols: 4 };

    fn run(
        capture: FixedCapture,
        viewport: FixedViewport,
    ) -> Option<Result<PuzzleSession, PuzzleError>> {
        let out = Rc::new(RefCell::new(None));
        let sink = out.clone();
        request_puzzle(&capture, &viewport, GRID, 3, move |res| {
            *sink.borrow_mut() = Some(res);
        });
        out.borrow_mut().take()
    }

    #[test]
    fn success_sizes_image_to_viewport() {
        let img = Image::new("data:image/png;base64,AA", 300, 150).unwrap();
        let session = run(FixedCapture(Ok(img)), FixedViewport(1024, 768))
            .unwrap()
            .unwrap();
        assert_eq!(session.image().width(), 1024);
        assert_eq!(session.image().height(), 768);
        assert_eq!(session.board().len(), 16);
        assert!(!session.is_solved());
    }

    #[test]
    fn capture_failure_is_reported() {
        let err = CaptureError::new("tile load failed");
        let res = run(FixedCapture(Err(err.clone())), FixedViewport(10, 10)).unwrap();
        assert_eq!(res.unwrap_err(), PuzzleError::Capture(err));
    }

    #[test]
    fn zero_viewport_is_rejected() {
        let img = Image::new("data:", 10, 10).unwrap();
        let res = run(FixedCapture(Ok(img)), FixedViewport(0, 400)).unwrap();
        assert!(matches!(res, Err(PuzzleError::EmptyImage { .. })));
    }
}
