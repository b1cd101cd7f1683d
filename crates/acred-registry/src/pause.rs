//! # Pause Switch — Global Mutation Gate
//!
//! A single boolean flag gating credential-store mutations. The flag is a
//! synchronous guard evaluated at the top of each mutating entry point, not
//! a mid-operation interrupt; queries are never blocked.

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// The global pause flag.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PauseSwitch {
    paused: bool,
}

impl PauseSwitch {
    /// Create an unpaused switch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the registry is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Engage the pause. Rejects a redundant pause.
    pub fn pause(&mut self) -> Result<(), RegistryError> {
        if self.paused {
            return Err(RegistryError::AlreadyPaused);
        }
        self.paused = true;
        Ok(())
    }

    /// Release the pause. Rejects a redundant unpause.
    pub fn unpause(&mut self) -> Result<(), RegistryError> {
        if !self.paused {
            return Err(RegistryError::NotPaused);
        }
        self.paused = false;
        Ok(())
    }

    /// Guard clause for mutating operations: rejects while paused.
    pub fn ensure_active(&self) -> Result<(), RegistryError> {
        if self.paused {
            return Err(RegistryError::RegistryPaused);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unpaused() {
        let switch = PauseSwitch::new();
        assert!(!switch.is_paused());
        assert!(switch.ensure_active().is_ok());
    }

    #[test]
    fn test_pause_and_unpause() {
        let mut switch = PauseSwitch::new();
        switch.pause().unwrap();
        assert!(switch.is_paused());
        assert!(matches!(
            switch.ensure_active(),
            Err(RegistryError::RegistryPaused)
        ));
        switch.unpause().unwrap();
        assert!(!switch.is_paused());
    }

    #[test]
    fn test_redundant_pause_rejected() {
        let mut switch = PauseSwitch::new();
        switch.pause().unwrap();
        assert!(matches!(switch.pause(), Err(RegistryError::AlreadyPaused)));
        assert!(switch.is_paused());
    }

    #[test]
    fn test_redundant_unpause_rejected() {
        let mut switch = PauseSwitch::new();
        assert!(matches!(switch.unpause(), Err(RegistryError::NotPaused)));
        assert!(!switch.is_paused());
    }
}
