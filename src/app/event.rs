/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    InsertChar(char),
    DeleteBackward,
    SetText(String),
    PasteClipboard,
    SelectPreset(usize),
    NextPreset,
    PreviousPreset,
    FontSizeUp,
    FontSizeDown,
    StartFullscreen,
    EndFullscreen,
    /// Tap on the fullscreen caption
    Tap,
    StartPreview,
    EndPreview,
    Warning(String),
    Quit,
    None,
}
