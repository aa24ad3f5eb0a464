//! Visibility state of the chat panel and how each state shows up in markup.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelVisibility {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowSize {
    #[default]
    Normal,
    Minimized,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsVisibility {
    Shown,
    #[default]
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialStatus {
    Ready,
    #[default]
    Missing,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatPanelState {
    pub panel: PanelVisibility,
    pub window: WindowSize,
    pub settings: SettingsVisibility,
    pub credential: CredentialStatus,
}

impl ChatPanelState {
    pub fn new(has_credential: bool) -> Self {
        Self {
            credential: if has_credential {
                CredentialStatus::Ready
            } else {
                CredentialStatus::Missing
            },
            ..Self::default()
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelVisibility::Open
    }

    /// `Some(open)` forces the panel, `None` flips it.
    pub fn toggle(&mut self, open: Option<bool>) {
        let open = open.unwrap_or(!self.is_open());
        self.panel = if open {
            PanelVisibility::Open
        } else {
            PanelVisibility::Closed
        };
    }

    pub fn toggle_minimized(&mut self) {
        self.window = match self.window {
            WindowSize::Normal => WindowSize::Minimized,
            WindowSize::Minimized => WindowSize::Normal,
        };
    }

    pub fn toggle_settings(&mut self) {
        self.settings = match self.settings {
            SettingsVisibility::Shown => SettingsVisibility::Hidden,
            SettingsVisibility::Hidden => SettingsVisibility::Shown,
        };
    }

    pub fn set_credential_ready(&mut self) {
        self.credential = CredentialStatus::Ready;
    }

    pub fn root_class(&self) -> &'static str {
        match self.panel {
            PanelVisibility::Open => "ai-chat open",
            PanelVisibility::Closed => "ai-chat",
        }
    }

    pub fn window_class(&self) -> &'static str {
        match self.window {
            WindowSize::Normal => "ai-chat__window",
            WindowSize::Minimized => "ai-chat__window min",
        }
    }

    /// Whether the settings panel carries the `hidden` attribute.
    pub fn settings_hidden(&self) -> bool {
        self.settings == SettingsVisibility::Hidden
    }

    pub fn status_style(&self) -> &'static str {
        match self.credential {
            CredentialStatus::Ready => "background: var(--accent);",
            CredentialStatus::Missing => "background: var(--danger);",
        }
    }
}
