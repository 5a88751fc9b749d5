//! Actor and player contracts, plus the proxy that splices a player-data
//! source and a permission source into one actor.

use carve_core::{BlockId, EntityState, ExtentError, Location};

/// Anything that can issue edits: identity, permissions, messaging.
pub trait Actor {
    fn name(&self) -> &str;

    /// Permission groups this actor belongs to.
    fn groups(&self) -> Vec<String>;

    fn has_permission(&self, permission: &str) -> bool;

    /// Send an informational message to the actor.
    fn print(&mut self, message: &str);

    /// Send an error message to the actor.
    fn print_error(&mut self, message: &str);
}

/// An actor with a body in a world: position, held item, inventory.
pub trait Player: Actor {
    fn location(&self) -> Location;

    fn set_location(&mut self, location: Location);

    /// Block id of the item currently held.
    fn item_in_hand(&self) -> BlockId;

    fn give_item(&mut self, item: BlockId, amount: u32);

    /// Players are live; there is no captured state to snapshot, and
    /// pretending otherwise would let callers silently misuse the contract.
    fn state(&self) -> Result<EntityState, ExtentError> {
        Err(ExtentError::Unsupported(
            "players carry no captured entity state",
        ))
    }
}

/// Composes a player-data source with an independent permission source.
///
/// Platforms often answer "who is this" and "what may they do" from
/// different services. The proxy presents the single [`Player`] contract:
/// body, inventory, and messaging delegate to the player source; groups and
/// permission checks delegate to the permission source.
pub struct PlayerProxy<P, A> {
    player: P,
    perms: A,
}

impl<P: Player, A: Actor> PlayerProxy<P, A> {
    pub fn new(player: P, perms: A) -> Self {
        Self { player, perms }
    }
}

impl<P: Player, A: Actor> Actor for PlayerProxy<P, A> {
    fn name(&self) -> &str {
        self.player.name()
    }

    fn groups(&self) -> Vec<String> {
        self.perms.groups()
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.perms.has_permission(permission)
    }

    fn print(&mut self, message: &str) {
        self.player.print(message)
    }

    fn print_error(&mut self, message: &str) {
        self.player.print_error(message)
    }
}

impl<P: Player, A: Actor> Player for PlayerProxy<P, A> {
    fn location(&self) -> Location {
        self.player.location()
    }

    fn set_location(&mut self, location: Location) {
        self.player.set_location(location)
    }

    fn item_in_hand(&self) -> BlockId {
        self.player.item_in_hand()
    }

    fn give_item(&mut self, item: BlockId, amount: u32) {
        self.player.give_item(item, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    struct FakePlayer {
        location: Location,
        messages: Vec<String>,
    }

    impl FakePlayer {
        fn new() -> Self {
            Self {
                location: Location::at(DVec3::new(0.5, 64.0, 0.5)),
                messages: Vec::new(),
            }
        }
    }

    impl Actor for FakePlayer {
        fn name(&self) -> &str {
            "sk"
        }

        fn groups(&self) -> Vec<String> {
            vec!["everyone".into()]
        }

        fn has_permission(&self, _permission: &str) -> bool {
            // The player source must never answer permission checks; the
            // proxy routes those to the permission source instead.
            false
        }

        fn print(&mut self, message: &str) {
            self.messages.push(message.into());
        }

        fn print_error(&mut self, message: &str) {
            self.messages.push(format!("error: {message}"));
        }
    }

    impl Player for FakePlayer {
        fn location(&self) -> Location {
            self.location
        }

        fn set_location(&mut self, location: Location) {
            self.location = location;
        }

        fn item_in_hand(&self) -> BlockId {
            BlockId(276)
        }

        fn give_item(&mut self, _item: BlockId, _amount: u32) {}
    }

    struct FakePerms;

    impl Actor for FakePerms {
        fn name(&self) -> &str {
            "perm-backend"
        }

        fn groups(&self) -> Vec<String> {
            vec!["admin".into(), "builder".into()]
        }

        fn has_permission(&self, permission: &str) -> bool {
            permission.starts_with("edit.")
        }

        fn print(&mut self, _message: &str) {}

        fn print_error(&mut self, _message: &str) {}
    }

    #[test]
    fn test_proxy_splits_delegation() {
        let proxy = PlayerProxy::new(FakePlayer::new(), FakePerms);

        // Identity and body from the player source.
        assert_eq!(proxy.name(), "sk");
        assert_eq!(proxy.item_in_hand(), BlockId(276));
        assert_eq!(
            proxy.location().block_position(),
            carve_core::BlockVector::new(0, 64, 0)
        );

        // Permissions from the permission source.
        assert_eq!(proxy.groups(), vec!["admin", "builder"]);
        assert!(proxy.has_permission("edit.paste"));
        assert!(!proxy.has_permission("chat.color"));
    }

    #[test]
    fn test_proxy_forwards_messages_and_movement() {
        let mut proxy = PlayerProxy::new(FakePlayer::new(), FakePerms);
        proxy.print("copied 120 blocks");
        proxy.print_error("nothing to paste");
        proxy.set_location(Location::at(DVec3::new(-3.2, 70.0, 8.0)));

        assert_eq!(
            proxy.player.messages,
            vec!["copied 120 blocks", "error: nothing to paste"]
        );
        assert_eq!(
            proxy.location().block_position(),
            carve_core::BlockVector::new(-4, 70, 8)
        );
    }

    #[test]
    fn test_player_state_is_unsupported() {
        let proxy = PlayerProxy::new(FakePlayer::new(), FakePerms);
        assert!(matches!(
            proxy.state(),
            Err(ExtentError::Unsupported(_))
        ));
    }
}
