/// UI-bezogener Anwendungszustand (HUD)
#[derive(Debug, Clone)]
pub struct UiState {
    /// Kontrollpanel sichtbar (sonst Erinnerungs-Hinweis)
    pub control_panel_visible: bool,
    /// Fadenkreuz liegt auf einem auswählbaren Ziel
    pub crosshair_highlighted: bool,
    /// Zeiger ist gefangen (Maus-Look aktiv)
    pub pointer_locked: bool,
    /// Optionen-Dialog sichtbar
    pub options_dialog_visible: bool,
    /// Temporäre Statusnachricht
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (Panel sichtbar, Zeiger frei).
    pub fn new() -> Self {
        Self {
            control_panel_visible: true,
            crosshair_highlighted: false,
            pointer_locked: false,
            options_dialog_visible: false,
            status_message: None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
