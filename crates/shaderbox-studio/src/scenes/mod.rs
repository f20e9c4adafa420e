//! Built-in scenes.

mod mandelbulb;
mod vector_field;

use std::fmt;
use std::str::FromStr;

use shaderbox_engine::core::App;

pub use mandelbulb::Mandelbulb;
pub use vector_field::VectorField;

/// Scene selectable from the command line.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SceneKind {
    Mandelbulb,
    #[default]
    VectorField,
}

impl SceneKind {
    pub const ALL: [SceneKind; 2] = [SceneKind::Mandelbulb, SceneKind::VectorField];

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Mandelbulb => "mandelbulb",
            SceneKind::VectorField => "vector-field",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SceneKind::Mandelbulb => "shaderbox - mandelbulb",
            SceneKind::VectorField => "shaderbox - vector field",
        }
    }

    pub fn build(self) -> Box<dyn App> {
        match self {
            SceneKind::Mandelbulb => Box::new(Mandelbulb::new()),
            SceneKind::VectorField => Box::new(VectorField::new()),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognized scene name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownScene(pub String);

impl fmt::Display for UnknownScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let valid: Vec<&str> = SceneKind::ALL.iter().map(|k| k.name()).collect();
        write!(f, "unknown scene `{}` (expected one of: {})", self.0, valid.join(", "))
    }
}

impl std::error::Error for UnknownScene {}

impl FromStr for SceneKind {
    type Err = UnknownScene;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownScene(s.to_string()))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scene_names() {
        assert_eq!("mandelbulb".parse::<SceneKind>(), Ok(SceneKind::Mandelbulb));
        assert_eq!("vector-field".parse::<SceneKind>(), Ok(SceneKind::VectorField));
        assert_eq!(SceneKind::default(), SceneKind::VectorField);
    }

    #[test]
    fn unknown_scene_lists_valid_names() {
        let err = "julia".parse::<SceneKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown scene `julia` (expected one of: mandelbulb, vector-field)"
        );
    }

    #[test]
    fn names_round_trip_through_display() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.to_string().parse::<SceneKind>(), Ok(kind));
        }
    }
}
