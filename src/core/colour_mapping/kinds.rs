#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourMapKind {
    #[default]
    SmoothGradient,
    Grayscale,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[Self::SmoothGradient, Self::Grayscale];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SmoothGradient => "Smooth gradient",
            Self::Grayscale => "Grayscale",
        }
    }
}

impl std::fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
