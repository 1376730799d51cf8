use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_result::IterationResult;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::burning_ship::algorithm::BurningShipAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::tricorn::algorithm::TricornAlgorithm;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFractalError {
    pub name: String,
}

impl fmt::Display for UnknownFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal '{}'", self.name)
    }
}

impl Error for UnknownFractalError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Tricorn,
    BurningShip,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Tricorn, Self::BurningShip];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Tricorn => "Tricorn",
            Self::BurningShip => "Burning Ship",
        }
    }

    #[must_use]
    pub fn algorithm(self) -> &'static dyn FractalAlgorithm {
        match self {
            Self::Mandelbrot => &MandelbrotAlgorithm,
            Self::Tricorn => &TricornAlgorithm,
            Self::BurningShip => &BurningShipAlgorithm,
        }
    }

    /// Looks a kind up by display name, ignoring case, spaces, `-` and `_`.
    pub fn from_name(name: &str) -> Result<Self, UnknownFractalError> {
        let wanted = normalise(name);

        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalise(kind.display_name()) == wanted)
            .ok_or_else(|| UnknownFractalError {
                name: name.to_string(),
            })
    }
}

impl FractalAlgorithm for FractalKinds {
    fn initial_viewport(&self) -> Viewport {
        self.algorithm().initial_viewport()
    }

    fn num_iterations(&self, c: Complex) -> IterationResult {
        self.algorithm().num_iterations(c)
    }

    fn display_name(&self) -> &'static str {
        FractalKinds::display_name(*self)
    }
}

fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = UnknownFractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(FractalKinds::ALL.first(), Some(&FractalKinds::default()));
    }

    #[test]
    fn display_names_match_algorithms() {
        for &kind in FractalKinds::ALL {
            assert_eq!(kind.algorithm().display_name(), kind.display_name());
        }
    }

    #[test]
    fn kind_dispatches_to_its_algorithm() {
        let c = Complex::new(-0.3, 0.7);

        for &kind in FractalKinds::ALL {
            let algorithm: &dyn FractalAlgorithm = &kind;
            assert_eq!(algorithm.num_iterations(c), kind.algorithm().num_iterations(c));
            assert_eq!(algorithm.initial_viewport(), kind.algorithm().initial_viewport());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = FractalKinds::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }

    #[test]
    fn from_name_round_trips_display_names() {
        for &kind in FractalKinds::ALL {
            assert_eq!(FractalKinds::from_name(kind.display_name()), Ok(kind));
        }
    }

    #[test]
    fn from_name_is_lenient_about_spelling() {
        for name in ["burning ship", "burning-ship", "BurningShip", "burning_ship"] {
            assert_eq!(FractalKinds::from_name(name), Ok(FractalKinds::BurningShip));
        }
        assert_eq!("TRICORN".parse::<FractalKinds>(), Ok(FractalKinds::Tricorn));
    }

    #[test]
    fn from_name_rejects_unknown_names() {
        assert_eq!(
            FractalKinds::from_name("Julia"),
            Err(UnknownFractalError {
                name: "Julia".to_string()
            })
        );
    }

    #[test]
    fn initial_viewports_are_square_and_distinct() {
        let viewports: Vec<_> = FractalKinds::ALL
            .iter()
            .map(|k| k.algorithm().initial_viewport())
            .collect();

        for viewport in &viewports {
            assert_eq!(viewport.width(), viewport.height());
        }
        assert_ne!(viewports[0], viewports[1]);
        assert_ne!(viewports[1], viewports[2]);
    }
}
