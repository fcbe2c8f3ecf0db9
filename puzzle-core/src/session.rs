use crate::board::{Board, partition};
use crate::rng::SplitMix64;
use crate::{Image, PuzzleError};

/// Shuffle attempts before accepting a board that came out already solved.
const MAX_RESHUFFLES: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Incomplete,
    Solved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapOutcome {
    /// Nothing moved: same slot, bad slot, or the puzzle is already finished.
    Ignored,
    Moved,
    /// This swap finished the puzzle. Reported once per round.
    Solved,
}

/// One puzzle round over a captured image.
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    image: Image,
    board: Board,
    seed: u64,
    completion: Completion,
}

impl PuzzleSession {
    /// Partition and shuffle `image`. A board with more than one tile never
    /// starts out solved unless every reshuffle lands on the identity.
    pub fn new(image: Image, rows: usize, cols: usize, seed: u64) -> Result<Self, PuzzleError> {
        let board = partition(&image, rows, cols)?;
        let mut session = Self {
            image,
            board,
            seed,
            completion: Completion::Solved,
        };
        session.deal(seed);
        Ok(session)
    }

    /// Start a new round on the same image and grid.
    pub fn reshuffle(&mut self, seed: u64) {
        self.seed = seed;
        self.deal(seed);
    }

    fn deal(&mut self, seed: u64) {
        let mut rng = SplitMix64::new(seed);
        self.board.shuffle(&mut rng);
        for _ in 0..MAX_RESHUFFLES {
            if self.board.len() < 2 || !self.board.is_solved() {
                break;
            }
            self.board.shuffle(&mut rng);
        }
        self.completion = self.evaluate();
        log::info!(
            "dealt {}x{} puzzle with seed {:#x} ({:?})",
            self.board.rows(),
            self.board.cols(),
            seed,
            self.completion
        );
    }

    pub fn swap(&mut self, slot_a: usize, slot_b: usize) -> SwapOutcome {
        if self.completion == Completion::Solved {
            return SwapOutcome::Ignored;
        }
        if !self.board.swap(slot_a, slot_b) {
            log::debug!("ignored swap {slot_a} <-> {slot_b}");
            return SwapOutcome::Ignored;
        }
        self.completion = self.evaluate();
        match self.completion {
            Completion::Solved => {
                log::info!("puzzle solved");
                SwapOutcome::Solved
            }
            Completion::Incomplete => SwapOutcome::Moved,
        }
    }

    fn evaluate(&self) -> Completion {
        if self.board.is_solved() {
            Completion::Solved
        } else {
            Completion::Incomplete
        }
    }

    pub fn completion(&self) -> Completion {
        self.completion
    }

    pub fn is_solved(&self) -> bool {
        self.completion == Completion::Solved
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Image {
        Image::new("data:image/png;base64,AA", 640, 480).unwrap()
    }

    fn solve(session: &mut PuzzleSession) -> usize {
        let mut swaps = 0;
        while let Some((slot, home)) = session.board().first_misplaced() {
            let outcome = session.swap(slot, home);
            assert_ne!(outcome, SwapOutcome::Ignored);
            swaps += 1;
        }
        swaps
    }

    #[test]
    fn new_session_is_shuffled() {
        let session = PuzzleSession::new(image(), 4, 4, 1).unwrap();
        assert_eq!(session.completion(), Completion::Incomplete);
        assert_eq!(session.board().len(), 16);
        assert_eq!((session.rows(), session.cols()), (4, 4));
    }

    #[test]
    fn two_tiles_never_start_solved() {
        for seed in 0..64 {
            let session = PuzzleSession::new(image(), 1, 2, seed).unwrap();
            assert_eq!(session.board().order(), vec![1, 0]);
        }
    }

    #[test]
    fn single_tile_starts_solved() {
        let session = PuzzleSession::new(image(), 1, 1, 5).unwrap();
        assert!(session.is_solved());
    }

    #[test]
    fn same_seed_same_deal() {
        let a = PuzzleSession::new(image(), 3, 3, 77).unwrap();
        let b = PuzzleSession::new(image(), 3, 3, 77).unwrap();
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn solved_is_reported_once_and_terminal() {
        let mut session = PuzzleSession::new(image(), 2, 2, 12).unwrap();
        let mut last = SwapOutcome::Ignored;
        while let Some((slot, home)) = session.board().first_misplaced() {
            last = session.swap(slot, home);
        }
        assert_eq!(last, SwapOutcome::Solved);
        assert!(session.is_solved());
        let before = session.board().clone();
        assert_eq!(session.swap(0, 1), SwapOutcome::Ignored);
        assert_eq!(session.board(), &before);
    }

    #[test]
    fn invalid_swaps_are_ignored() {
        let mut session = PuzzleSession::new(image(), 3, 3, 4).unwrap();
        let before = session.board().clone();
        assert_eq!(session.swap(2, 2), SwapOutcome::Ignored);
        assert_eq!(session.swap(2, 40), SwapOutcome::Ignored);
        assert_eq!(session.board(), &before);
        assert_eq!(session.completion(), Completion::Incomplete);
    }

    #[test]
    fn reshuffle_restarts_round() {
        let mut session = PuzzleSession::new(image(), 2, 3, 8).unwrap();
        solve(&mut session);
        assert!(session.is_solved());
        session.reshuffle(9);
        assert_eq!(session.seed(), 9);
        assert_eq!(session.completion(), Completion::Incomplete);
        assert!(solve(&mut session) > 0);
    }

    #[test]
    fn rejects_bad_grid() {
        assert!(matches!(
            PuzzleSession::new(image(), 0, 3, 1),
            Err(PuzzleError::InvalidGrid { .. })
        ));
    }
}
