#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormatKind {
    #[default]
    Bmp,
    Ppm,
}

impl ImageFormatKind {
    pub const ALL: &'static [Self] = &[Self::Bmp, Self::Ppm];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Ppm => "PPM",
        }
    }
}

impl std::fmt::Display for ImageFormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
