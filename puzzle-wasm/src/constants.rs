/// DOM ids and class names the host page provides or the crate creates.
pub const MAP_ID: &str = "map";
pub const IMAGES_ID: &str = "images";
pub const PUZZLE_CONTAINER_ID: &str = "puzzle-container";
pub const PIECE_CLASS: &str = "puzzle-piece";
pub const PIECE_SELECTOR: &str = ".puzzle-piece";
/// `data-slot` attribute, as seen through `HtmlElement::dataset`.
pub const SLOT_KEY: &str = "slot";

pub const CAPTURE_BUTTON_ID: &str = "mapBtn";
pub const LOCATE_BUTTON_ID: &str = "getCurrentLocation";
pub const PUZZLE_BUTTON_ID: &str = "generatePuzzle";
/// Optional; only wired when the page has it.
pub const RESHUFFLE_BUTTON_ID: &str = "reshufflePuzzle";

/// Drag payload format.
pub const DRAG_FORMAT: &str = "text/plain";

/// Global the host page may set to a JSON config object or string.
pub const CONFIG_GLOBAL: &str = "__PUZZLE_CONFIG";

pub const SOLVED_MESSAGE: &str = "Puzzle solved!";
pub const NO_GEOLOCATION_MESSAGE: &str = "Geolocation is not supported by this browser.";
