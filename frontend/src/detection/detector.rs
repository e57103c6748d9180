use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HAZARD_LABEL: &str = "Potential Hazard";
const MIN_BOX_WIDTH: f64 = 100.0;
const EXTRA_BOX_WIDTH: f64 = 150.0;
const MIN_BOX_HEIGHT: f64 = 100.0;
const EXTRA_BOX_HEIGHT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
}

/// Produces at most one annotation for the frame currently on `surface`.
/// The render loop only talks to this trait, so a real model can replace the
/// synthetic one without touching camera or canvas code.
pub trait HazardDetector {
    fn annotate(&mut self, surface: Surface) -> Option<Annotation>;
}

/// Placeholder detector: with fixed probability per frame, a box of random
/// size at a random position.
pub struct SyntheticDetector<R: Rng = StdRng> {
    rng: R,
    probability: f64,
}

impl SyntheticDetector<StdRng> {
    pub fn from_entropy(probability: f64) -> Self {
        Self::with_rng(StdRng::from_entropy(), probability)
    }
}

impl<R: Rng> SyntheticDetector<R> {
    pub fn with_rng(rng: R, probability: f64) -> Self {
        let probability = if probability.is_finite() {
            probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { rng, probability }
    }
}

impl<R: Rng> HazardDetector for SyntheticDetector<R> {
    fn annotate(&mut self, surface: Surface) -> Option<Annotation> {
        if !self.rng.gen_bool(self.probability) {
            return None;
        }
        let x = self.rng.gen::<f64>() * (surface.width - MIN_BOX_WIDTH).max(0.0);
        let y = self.rng.gen::<f64>() * (surface.height - MIN_BOX_HEIGHT).max(0.0);
        let width = MIN_BOX_WIDTH + self.rng.gen::<f64>() * EXTRA_BOX_WIDTH;
        let height = MIN_BOX_HEIGHT + self.rng.gen::<f64>() * EXTRA_BOX_HEIGHT;
        Some(Annotation {
            x,
            y,
            width,
            height,
            label: HAZARD_LABEL.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Surface = Surface {
        width: 1280.0,
        height: 720.0,
    };

    fn seeded(probability: f64) -> SyntheticDetector<StdRng> {
        SyntheticDetector::with_rng(StdRng::seed_from_u64(42), probability)
    }

    #[test]
    fn roughly_three_in_ten_frames_are_marked() {
        let mut detector = seeded(0.3);
        let hits = (0..10_000)
            .filter(|_| detector.annotate(SCREEN).is_some())
            .count();
        assert!((2_500..=3_500).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn boxes_stay_within_expected_geometry() {
        let mut detector = seeded(1.0);
        for _ in 0..1_000 {
            let mark = detector.annotate(SCREEN).unwrap();
            assert!((0.0..=SCREEN.width - 100.0).contains(&mark.x));
            assert!((0.0..=SCREEN.height - 100.0).contains(&mark.y));
            assert!((100.0..=250.0).contains(&mark.width));
            assert!((100.0..=200.0).contains(&mark.height));
            assert_eq!(mark.label, HAZARD_LABEL);
        }
    }

    #[test]
    fn tiny_surface_pins_origin() {
        let mut detector = seeded(1.0);
        let mark = detector
            .annotate(Surface {
                width: 40.0,
                height: 20.0,
            })
            .unwrap();
        assert_eq!((mark.x, mark.y), (0.0, 0.0));
    }

    #[test]
    fn probability_is_clamped() {
        let mut never = seeded(-3.0);
        let mut always = seeded(7.0);
        let mut broken = seeded(f64::NAN);
        for _ in 0..100 {
            assert!(never.annotate(SCREEN).is_none());
            assert!(always.annotate(SCREEN).is_some());
            assert!(broken.annotate(SCREEN).is_none());
        }
    }
}
