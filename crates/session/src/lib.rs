//! # Dex Session
//!
//! Mock authentication over a fixed demo credential table. Verifying a
//! credential yields a [`Trainer`] profile with derived progression fields;
//! nothing is persisted, and the catalog layer never gates on
//! authentication state.

use dex_protocol::Trainer;
use once_cell::sync::Lazy;

/// Catalog size used for the completion percentage.
const TOTAL_POKEMON: u32 = 1008;

const MAX_TRAINER_LEVEL: u32 = 50;

struct DemoAccount {
    id: &'static str,
    username: &'static str,
    password: &'static str,
    name: &'static str,
    region: &'static str,
    badges: u32,
    pokemon_caught: u32,
    join_date: &'static str,
}

static DEMO_ACCOUNTS: Lazy<Vec<DemoAccount>> = Lazy::new(|| {
    vec![
        DemoAccount {
            id: "1",
            username: "ash ketchum",
            password: "pikachu123",
            name: "Ash Ketchum",
            region: "Kanto",
            badges: 8,
            pokemon_caught: 42,
            join_date: "2024-01-15",
        },
        DemoAccount {
            id: "2",
            username: "misty",
            password: "starmie123",
            name: "Misty",
            region: "Kanto",
            badges: 0,
            pokemon_caught: 15,
            join_date: "2024-02-20",
        },
        DemoAccount {
            id: "3",
            username: "brock",
            password: "onix123",
            name: "Brock",
            region: "Kanto",
            badges: 0,
            pokemon_caught: 22,
            join_date: "2024-03-10",
        },
    ]
});

fn trainer_level(pokemon_caught: u32, badges: u32) -> u32 {
    (pokemon_caught / 5 + badges * 2).min(MAX_TRAINER_LEVEL)
}

fn pokedex_completion(pokemon_caught: u32) -> u32 {
    let percentage = (f64::from(pokemon_caught) / f64::from(TOTAL_POKEMON) * 100.0).round();
    (percentage as u32).min(100)
}

/// Verify a credential pair against the demo table. Username matching is
/// case-insensitive, the password is exact.
pub fn verify(username: &str, password: &str) -> Option<Trainer> {
    DEMO_ACCOUNTS
        .iter()
        .find(|account| {
            account.username.eq_ignore_ascii_case(username.trim()) && account.password == password
        })
        .map(|account| Trainer {
            id: account.id.to_string(),
            name: account.name.to_string(),
            level: trainer_level(account.pokemon_caught, account.badges),
            pokemon_caught: account.pokemon_caught,
            pokedex_completion: pokedex_completion(account.pokemon_caught),
            region: account.region.to_string(),
            badges: account.badges,
            join_date: account.join_date.to_string(),
        })
}

/// In-memory session: at most one signed-in trainer, dropped on logout.
#[derive(Default)]
pub struct Session {
    trainer: Option<Trainer>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt a sign-in; the previous trainer is kept on failure.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        match verify(username, password) {
            Some(trainer) => {
                log::info!("Trainer {} signed in", trainer.name);
                self.trainer = Some(trainer);
                true
            }
            None => {
                log::debug!("Rejected sign-in for '{username}'");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(trainer) = self.trainer.take() {
            log::info!("Trainer {} signed out", trainer.name);
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.trainer.is_some()
    }

    pub fn current_profile(&self) -> Option<&Trainer> {
        self.trainer.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verify_accepts_demo_credentials_case_insensitively() {
        let trainer = verify("Ash Ketchum", "pikachu123").expect("known account");
        assert_eq!(trainer.name, "Ash Ketchum");
        assert_eq!(trainer.region, "Kanto");
        assert_eq!(trainer.badges, 8);
    }

    #[test]
    fn verify_requires_exact_password() {
        assert!(verify("misty", "starmie123").is_some());
        assert!(verify("misty", "Starmie123").is_none());
        assert!(verify("misty", "").is_none());
        assert!(verify("gary", "eevee123").is_none());
    }

    #[test]
    fn derived_level_combines_catches_and_badges() {
        // 42 caught, 8 badges: 42/5 + 8*2 = 24.
        let ash = verify("ash ketchum", "pikachu123").unwrap();
        assert_eq!(ash.level, 24);

        // 15 caught, no badges: 15/5 = 3.
        let misty = verify("misty", "starmie123").unwrap();
        assert_eq!(misty.level, 3);
    }

    #[test]
    fn derived_level_caps_at_fifty() {
        assert_eq!(trainer_level(1000, 8), 50);
        assert_eq!(trainer_level(0, 0), 0);
    }

    #[test]
    fn completion_is_a_capped_percentage() {
        assert_eq!(pokedex_completion(0), 0);
        // 42 / 1008 rounds to 4%.
        assert_eq!(pokedex_completion(42), 4);
        assert_eq!(pokedex_completion(1008), 100);
        assert_eq!(pokedex_completion(5000), 100);
    }

    #[test]
    fn session_tracks_the_signed_in_trainer() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.current_profile().is_none());

        assert!(session.login("brock", "onix123"));
        assert!(session.is_authenticated());
        assert_eq!(session.current_profile().unwrap().name, "Brock");

        // A failed login keeps the existing session.
        assert!(!session.login("brock", "wrong"));
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
    }
}
