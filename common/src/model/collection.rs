use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The top-level paths the document store accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Products,
    Gallery,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Products, Collection::Gallery];

    pub fn as_path(&self) -> &'static str {
        match self {
            Collection::Products => "products",
            Collection::Gallery => "gallery",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown collection '{0}'")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "products" => Ok(Collection::Products),
            "gallery" => Ok(Collection::Gallery),
            other => Err(UnknownCollection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths_only() {
        assert_eq!("products".parse::<Collection>(), Ok(Collection::Products));
        assert_eq!("gallery".parse::<Collection>(), Ok(Collection::Gallery));
        assert_eq!(
            "Gallery".parse::<Collection>(),
            Err(UnknownCollection("Gallery".to_string()))
        );
        assert!("gallery/abc".parse::<Collection>().is_err());
    }
}
