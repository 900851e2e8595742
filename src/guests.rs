//! Guests

use std::fmt;

use uuid::Uuid;

/// Temporary correlation id assigned to a guest when it is created.
///
/// Callers remove guests from a booking by posting this id rather than
/// reproducing the full guest details, so it is kept distinct from guest
/// identity and excluded from equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuestTempId(Uuid);

impl GuestTempId {
    /// Generate a fresh correlation id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GuestTempId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GuestTempId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A guest occupying a bed in a booked room.
#[derive(Debug, Clone)]
pub struct Guest {
    first_name: String,
    last_name: String,
    child: bool,
    temp_id: GuestTempId,
}

impl Guest {
    /// Create a new guest with a freshly generated [`GuestTempId`].
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, child: bool) -> Self {
        Guest {
            first_name: first_name.into(),
            last_name: last_name.into(),
            child,
            temp_id: GuestTempId::new(),
        }
    }

    /// The guest's first name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The guest's last name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether the guest is a child.
    pub fn is_child(&self) -> bool {
        self.child
    }

    /// The temporary correlation id used to remove this guest from a booking.
    pub fn temp_id(&self) -> GuestTempId {
        self.temp_id
    }
}

/// Guest identity is name plus child flag; the correlation id is excluded so
/// that a re-added identical guest compares equal to the one already present.
impl PartialEq for Guest {
    fn eq(&self, other: &Self) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.child == other.child
    }
}

impl Eq for Guest {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_temp_id() {
        let a = Guest::new("john", "smith", false);
        let b = Guest::new("john", "smith", false);

        assert_ne!(a.temp_id(), b.temp_id());
        assert_eq!(a, b);
    }

    #[test]
    fn equality_includes_child_flag() {
        let adult = Guest::new("marie", "smith", false);
        let child = Guest::new("marie", "smith", true);

        assert_ne!(adult, child);
    }

    #[test]
    fn temp_ids_are_unique() {
        let ids: Vec<GuestTempId> = (0..8).map(|_| GuestTempId::new()).collect();

        for (i, id) in ids.iter().enumerate() {
            assert!(
                !ids.iter().skip(i + 1).any(|other| other == id),
                "expected every generated id to be unique"
            );
        }
    }
}
