//! Attached players keyed by video element id.

use std::collections::HashMap;

use showreel_core::Result;

/// One entry per bound video element.
///
/// A player is registered as soon as it is built, before any listener is
/// attached, so a failed bind is never retried against the same element.
#[derive(Debug)]
pub struct PlayerRegistry<P> {
    players: HashMap<String, P>,
}

impl<P> Default for PlayerRegistry<P> {
    fn default() -> Self {
        Self {
            players: HashMap::new(),
        }
    }
}

impl<P: Clone> PlayerRegistry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the player bound to `id`, if any.
    pub fn get(&self, id: &str) -> Option<P> {
        self.players.get(id).cloned()
    }

    /// Returns true if `id` already has a player.
    pub fn contains(&self, id: &str) -> bool {
        self.players.contains_key(id)
    }

    /// Returns the player for `id`, building and binding it on first use.
    ///
    /// `build` runs only when `id` is unregistered. Its player is registered
    /// before `bind` runs, so a `bind` error leaves the element registered
    /// and a later call returns the partly bound player instead of binding
    /// again.
    pub fn get_or_attach(
        &mut self,
        id: &str,
        build: impl FnOnce() -> Result<P>,
        bind: impl FnOnce(&P) -> Result<()>,
    ) -> Result<P> {
        if let Some(player) = self.get(id) {
            return Ok(player);
        }
        let player = build()?;
        self.players.insert(id.to_string(), player.clone());
        bind(&player)?;
        Ok(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showreel_core::PlayerError;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn failed_bind_stays_registered() {
        let mut registry = PlayerRegistry::new();
        let binds = Cell::new(0);

        let first = registry.get_or_attach(
            "promo-video",
            || Ok(Rc::new(1)),
            |_| {
                binds.set(binds.get() + 1);
                Err(PlayerError::Host("addEventListener threw".into()))
            },
        );
        assert!(first.is_err());
        assert!(registry.contains("promo-video"));

        let second = registry
            .get_or_attach(
                "promo-video",
                || panic!("player built twice"),
                |_| {
                    binds.set(binds.get() + 1);
                    Ok(())
                },
            )
            .unwrap();
        assert_eq!(*second, 1);
        assert_eq!(binds.get(), 1);
    }

    #[test]
    fn failed_build_registers_nothing() {
        let mut registry: PlayerRegistry<Rc<u8>> = PlayerRegistry::new();
        let result = registry.get_or_attach(
            "promo-video",
            || Err(PlayerError::Host("no window".into())),
            |_| Ok(()),
        );
        assert!(result.is_err());
        assert!(!registry.contains("promo-video"));
    }

    #[test]
    fn players_share_the_registered_entry() {
        let mut registry = PlayerRegistry::new();
        let a = registry
            .get_or_attach("intro", || Ok(Rc::new(7)), |_| Ok(()))
            .unwrap();
        let b = registry
            .get_or_attach("intro", || Ok(Rc::new(8)), |_| Ok(()))
            .unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert!(registry.get("outro").is_none());
    }
}
