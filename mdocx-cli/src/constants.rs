// ABOUTME: Centralized constants for the mdocx CLI application
// ABOUTME: Contains browser layout rules, image budgets, placeholder text, and key hints

/// Split-pane layout rules for the browser
pub mod layout {
    /// Narrowest list pane, in cells
    pub const MIN_LIST_WIDTH: u16 = 24;

    /// Narrowest content pane, in cells
    pub const MIN_CONTENT_WIDTH: u16 = 20;

    /// Shortest list or viewport, in rows
    pub const MIN_PANE_HEIGHT: u16 = 5;

    /// Rows taken by the tab bar, its gap, and the help line
    pub const CHROME_ROWS: u16 = 3;

    /// Column between the list and content panes
    pub const DIVIDER_WIDTH: u16 = 1;

    /// Horizontal margin for full-width tabs
    pub const FULL_WIDTH_MARGIN: u16 = 2;

    /// Lines scrolled per mouse wheel notch
    pub const WHEEL_STEP: usize = 3;

    /// Width the markdown renderer is built with before the first resize
    pub const INITIAL_RENDER_WIDTH: u16 = 80;

    /// Rows per list entry: title, description, gap
    pub const LIST_ENTRY_ROWS: u16 = 3;

    /// Rows above the first list entry: title, gap
    pub const LIST_HEADER_ROWS: u16 = 2;

    /// First screen row below the tab bar and its gap
    pub const BODY_TOP_ROW: u16 = 2;
}

/// Pixel budget for Sixel previews
pub mod image {
    /// Approximate pixel width of a terminal cell
    pub const CELL_WIDTH_PX: i64 = 8;

    /// Approximate pixel height of a terminal cell
    pub const CELL_HEIGHT_PX: i64 = 16;

    /// Rows kept free below the image for the return hint
    pub const STATUS_ROWS: i64 = 2;

    pub const MIN_WIDTH_PX: i64 = 80;
    pub const MIN_HEIGHT_PX: i64 = 100;

    /// Maximum palette size for Sixel output
    pub const SIXEL_MAX_COLORS: u16 = 256;

    /// Error diffusion strength for Sixel dithering
    pub const SIXEL_DIFFUSION: f32 = 0.875;
}

/// Text shown in place of missing content
pub mod placeholders {
    pub const EMPTY_MARKDOWN: &str = "(empty markdown)";
    pub const NO_METADATA: &str = "(no metadata)";
    pub const NO_HEADER: &str = "(header unavailable)";
    pub const NO_MARKDOWN_FILES: &str = "(no markdown files)";
    pub const NO_MEDIA: &str = "(no media)";
    pub const IMAGE_RETURN_HINT: &str = "(Press any key to return)";
    pub const VIEW_IMAGE_HINT: &str = "Press 'v' to view image";
}

/// Help line contents
pub mod keys {
    pub const HELP_LIST: &str = "tab/←→ switch • ↑↓/jk select • pgup/pgdn scroll • q quit";
    pub const HELP_MEDIA: &str = "tab/←→ switch • ↑↓/jk select • v view image • q quit";
    pub const HELP_TEXT: &str = "tab/←→ switch • ↑↓/pgup/pgdn scroll • q quit";
}

/// Environment variables read by the CLI
pub mod env {
    pub const FORCE_IMAGES: &str = "MDOCX_FORCE_IMAGES";
    pub const COLORFGBG: &str = "COLORFGBG";
    pub const XDG_CONFIG_HOME: &str = "XDG_CONFIG_HOME";
}
