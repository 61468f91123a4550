/// Parsing strategy selected from the scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Handler {
    /// Authority, path, query and fragment over one forward cursor
    #[default]
    Hierarchical,
    /// Everything after the scheme colon kept verbatim
    Opaque,
}

/// Built-in URI scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    File,
    Urn,
    Mailto,
    Tel,
    News,
    /// Any scheme outside the built-in table
    #[default]
    Other,
}

impl SchemeType {
    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            _ => None,
        }
    }

    /// Strategy used to parse everything after the scheme.
    /// Unmapped schemes are hierarchical.
    pub fn handler(self) -> Handler {
        match self {
            Self::Urn | Self::Mailto | Self::Tel | Self::News => Handler::Opaque,
            _ => Handler::Hierarchical,
        }
    }
}
