/// How leapfrog reports velocities at grid times.
///
/// Leapfrog internally carries velocities half a step ahead of positions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convention {
    /// Close the half step before reporting, so each state's positions and
    /// velocities refer to the same time.
    #[default]
    Synchronized,

    /// Report the half-step velocities as carried, leading positions by
    /// `dt / 2`.
    Staggered,
}

/// Configuration for the leapfrog integrator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Velocity reporting convention.
    pub convention: Convention,
}

impl Config {
    /// Returns a configuration that reports staggered velocities.
    #[must_use]
    pub fn staggered() -> Self {
        Self {
            convention: Convention::Staggered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_synchronized() {
        assert_eq!(Config::default().convention, Convention::Synchronized);
        assert_eq!(Config::staggered().convention, Convention::Staggered);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_convention_by_name() {
        let config: Config =
            serde_json::from_str(r#"{"convention":"Staggered"}"#).expect("should deserialize");
        assert_eq!(config, Config::staggered());
    }
}
