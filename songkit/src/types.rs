use scylla::statement::Consistency;
use scylla::DeserializeRow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One row of the songs table.
///
/// Identity is the full composite primary key (id, title, album,
/// artist), so several rows may share an id as long as any of the
/// clustering columns differ.
#[derive(Debug, Clone, PartialEq, Eq, DeserializeRow)]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub album: String,
    pub artist: String,
}

impl Song {
    pub fn new(
        id: Uuid,
        title: impl Into<String>,
        album: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            album: album.into(),
            artist: artist.into(),
        }
    }

    /// Bound parameters in songs column order (id, title, album, artist).
    pub fn bind_values(&self) -> (Uuid, &str, &str, &str) {
        (self.id, &self.title, &self.album, &self.artist)
    }
}

/// Consistency level requested for every statement of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyLevel {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    LocalOne,
}

impl ConsistencyLevel {
    /// Maps to the driver's consistency enum.
    pub fn to_driver(self) -> Consistency {
        match self {
            ConsistencyLevel::Any => Consistency::Any,
            ConsistencyLevel::One => Consistency::One,
            ConsistencyLevel::Two => Consistency::Two,
            ConsistencyLevel::Three => Consistency::Three,
            ConsistencyLevel::Quorum => Consistency::Quorum,
            ConsistencyLevel::All => Consistency::All,
            ConsistencyLevel::LocalQuorum => Consistency::LocalQuorum,
            ConsistencyLevel::EachQuorum => Consistency::EachQuorum,
            ConsistencyLevel::LocalOne => Consistency::LocalOne,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_values_follow_column_order() {
        let id = Uuid::new_v4();
        let song = Song::new(id, "title", "album", "artist");

        let (bound_id, title, album, artist) = song.bind_values();
        assert_eq!(bound_id, id);
        assert_eq!(title, "title");
        assert_eq!(album, "album");
        assert_eq!(artist, "artist");
    }

    #[test]
    fn test_consistency_maps_to_driver() {
        assert_eq!(ConsistencyLevel::One.to_driver(), Consistency::One);
        assert_eq!(ConsistencyLevel::Quorum.to_driver(), Consistency::Quorum);
        assert_eq!(
            ConsistencyLevel::LocalQuorum.to_driver(),
            Consistency::LocalQuorum
        );
    }
}
