//! S-N curve for tooth root and flank per ISO 6336.
//!
//! A curve is defined by two anchors per side (static and endurance point) and
//! two regime flags:
//!
//! - limited pitting: the flank curve breaks at 1e7 cycles (stress midpoint
//!   between static and endurance limit) and reaches the endurance limit at 1e9
//! - reduced life factor: beyond the endurance point both sides keep decaying to
//!   0.85 × the endurance stress at 1e10 cycles
//!
//! Slopes and stresses are recomputed on every call; a curve never changes after
//! `SnCurve::new` has validated it.

use std::fmt;

use crate::domain::{
    CurveAnchors, CurveRecord, CurveSide, CurveSlopes, LIMITED_PITTING_ENDURANCE_CYCLES,
    LIMITED_PITTING_TRANSITION_CYCLES, PermissibleStress, REDUCED_LIFE_CYCLES, REDUCED_LIFE_FACTOR,
    SnCurveParams,
};
use crate::error::CurveError;
use crate::math::{loglog_interpolate, loglog_slope, nearly_equal, power_law_stress};

/// A validated, immutable S-N curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SnCurve {
    params: SnCurveParams,
}

impl SnCurve {
    /// Validate `params` and build the curve.
    ///
    /// Fails with `CurveError::InvalidCurveParameters` when a value is not a finite
    /// positive number, when the static anchor does not lie before and above the
    /// endurance anchor, or when an enabled regime does not fit the anchors.
    pub fn new(params: SnCurveParams) -> Result<Self, CurveError> {
        validate_anchors(&params.name, "root", &params.root)?;
        validate_anchors(&params.name, "flank", &params.flank)?;

        if params.limited_pitting {
            if params.flank.static_cycles >= LIMITED_PITTING_TRANSITION_CYCLES {
                return Err(CurveError::invalid(
                    &params.name,
                    format!(
                        "limited pitting needs flank static cycles below {LIMITED_PITTING_TRANSITION_CYCLES:e}, got {:e}",
                        params.flank.static_cycles
                    ),
                ));
            }
            if !nearly_equal(params.flank.endurance_cycles, LIMITED_PITTING_ENDURANCE_CYCLES, 1e-9) {
                return Err(CurveError::invalid(
                    &params.name,
                    format!(
                        "limited pitting needs flank endurance cycles of {LIMITED_PITTING_ENDURANCE_CYCLES:e}, got {:e}",
                        params.flank.endurance_cycles
                    ),
                ));
            }
        }

        if params.reduced_life_factor {
            for (side, anchors) in [("root", &params.root), ("flank", &params.flank)] {
                if anchors.endurance_cycles >= REDUCED_LIFE_CYCLES {
                    return Err(CurveError::invalid(
                        &params.name,
                        format!(
                            "reduced life factor needs {side} endurance cycles below {REDUCED_LIFE_CYCLES:e}, got {:e}",
                            anchors.endurance_cycles
                        ),
                    ));
                }
            }
        }

        let curve = Self { params };
        curve.slopes()?;
        Ok(curve)
    }

    pub fn name(&self) -> &str {
        &self.params.name
    }

    pub fn params(&self) -> &SnCurveParams {
        &self.params
    }

    pub fn root(&self) -> &CurveAnchors {
        &self.params.root
    }

    pub fn flank(&self) -> &CurveAnchors {
        &self.params.flank
    }

    pub fn anchors(&self, side: CurveSide) -> &CurveAnchors {
        match side {
            CurveSide::Root => &self.params.root,
            CurveSide::Flank => &self.params.flank,
        }
    }

    pub fn limited_pitting(&self) -> bool {
        self.params.limited_pitting
    }

    pub fn reduced_life_factor(&self) -> bool {
        self.params.reduced_life_factor
    }

    /// Flank stress at the limited-pitting transition (1e7 cycles).
    pub fn limited_pitting_midpoint(&self) -> f64 {
        0.5 * (self.params.flank.endurance_stress + self.params.flank.static_stress)
    }

    /// Stress reached at 1e10 cycles on `side`.
    pub fn long_life_stress(&self, side: CurveSide) -> f64 {
        let endurance = self.anchors(side).endurance_stress;
        if self.params.reduced_life_factor {
            REDUCED_LIFE_FACTOR * endurance
        } else {
            endurance
        }
    }

    /// Derive the slopes of all active segments.
    pub fn slopes(&self) -> Result<CurveSlopes, CurveError> {
        let root = &self.params.root;
        let flank = &self.params.flank;

        let root_slope = self.slope(
            "root",
            (root.static_cycles, root.static_stress),
            (root.endurance_cycles, root.endurance_stress),
        )?;

        let (flank_slope, flank_limited_pitting) = if self.params.limited_pitting {
            let midpoint = self.limited_pitting_midpoint();
            let first = self.slope(
                "flank",
                (flank.static_cycles, flank.static_stress),
                (LIMITED_PITTING_TRANSITION_CYCLES, midpoint),
            )?;
            let second = self.slope(
                "limited pitting",
                (LIMITED_PITTING_TRANSITION_CYCLES, midpoint),
                (LIMITED_PITTING_ENDURANCE_CYCLES, flank.endurance_stress),
            )?;
            (first, Some(second))
        } else {
            let slope = self.slope(
                "flank",
                (flank.static_cycles, flank.static_stress),
                (flank.endurance_cycles, flank.endurance_stress),
            )?;
            (slope, None)
        };

        let (root_reduced_life, flank_reduced_life) = if self.params.reduced_life_factor {
            (
                Some(self.reduced_life_slope("root reduced life", root)?),
                Some(self.reduced_life_slope("flank reduced life", flank)?),
            )
        } else {
            (None, None)
        };

        Ok(CurveSlopes {
            root: root_slope,
            flank: flank_slope,
            flank_limited_pitting,
            root_reduced_life,
            flank_reduced_life,
        })
    }

    /// Permissible root and flank stress after `load_cycles` cycles.
    ///
    /// `load_cycles` may be zero (static region) but must be finite and not
    /// negative; otherwise `CurveError::NumericDomainError` is returned.
    pub fn permissible_stress(&self, load_cycles: f64) -> Result<PermissibleStress, CurveError> {
        if !(load_cycles.is_finite() && load_cycles >= 0.0) {
            return Err(CurveError::NumericDomainError {
                what: "load cycles",
                value: load_cycles,
            });
        }

        let slopes = self.slopes()?;
        let root = self.root_stress(load_cycles, &slopes)?;
        let flank = self.flank_stress(load_cycles, &slopes)?;
        Ok(PermissibleStress { root, flank })
    }

    /// Load cycles at which the curve reaches `stress`.
    ///
    /// Inverting the piecewise curve is not supported; this always fails with
    /// `CurveError::NotImplemented`.
    pub fn cycles_for_stress(&self, _stress: f64) -> Result<f64, CurveError> {
        Err(CurveError::NotImplemented {
            operation: "cycles_for_stress",
        })
    }

    /// Vertices of the curve on a log-log plot, from `start` to 1e10 cycles.
    ///
    /// Between consecutive vertices the curve is a straight line in log-log space,
    /// so drawing the polyline reproduces `permissible_stress` exactly up to
    /// 1e10 cycles. `start` is only used when it lies before the static limit.
    /// An endurance limit beyond 1e10 cycles is cut off at 1e10.
    pub fn knee_points(&self, side: CurveSide, start: f64) -> Vec<(f64, f64)> {
        let anchors = self.anchors(side);
        let mut points = Vec::with_capacity(5);

        if start > 0.0 && start < anchors.static_cycles {
            points.push((start, anchors.static_stress));
        }
        points.push((anchors.static_cycles, anchors.static_stress));
        if side == CurveSide::Flank && self.params.limited_pitting {
            points.push((LIMITED_PITTING_TRANSITION_CYCLES, self.limited_pitting_midpoint()));
        }

        let endurance = (anchors.endurance_cycles, anchors.endurance_stress);
        if anchors.endurance_cycles > REDUCED_LIFE_CYCLES {
            // Reduced life is off here, so the last segment is still finite-life.
            let from = (anchors.static_cycles, anchors.static_stress);
            points.push((REDUCED_LIFE_CYCLES, loglog_interpolate(from, endurance, REDUCED_LIFE_CYCLES)));
        } else {
            points.push(endurance);
            if anchors.endurance_cycles < REDUCED_LIFE_CYCLES {
                points.push((REDUCED_LIFE_CYCLES, self.long_life_stress(side)));
            }
        }

        points
    }

    /// Flat record of all inputs and derived slopes, for exporters.
    pub fn to_record(&self) -> Result<CurveRecord, CurveError> {
        let slopes = self.slopes()?;
        let root = &self.params.root;
        let flank = &self.params.flank;
        Ok(CurveRecord {
            name: self.params.name.clone(),
            root_static_cycles: root.static_cycles,
            root_endurance_cycles: root.endurance_cycles,
            root_static_stress: root.static_stress,
            root_endurance_stress: root.endurance_stress,
            flank_static_cycles: flank.static_cycles,
            flank_endurance_cycles: flank.endurance_cycles,
            flank_static_stress: flank.static_stress,
            flank_endurance_stress: flank.endurance_stress,
            limited_pitting: self.params.limited_pitting,
            reduced_life_factor: self.params.reduced_life_factor,
            root_slope: Some(slopes.root),
            flank_slope: Some(slopes.flank),
            flank_limited_pitting_slope: slopes.flank_limited_pitting,
            root_reduced_life_slope: slopes.root_reduced_life,
            flank_reduced_life_slope: slopes.flank_reduced_life,
        })
    }

    fn slope(&self, segment: &str, from: (f64, f64), to: (f64, f64)) -> Result<f64, CurveError> {
        loglog_slope(from.0, from.1, to.0, to.1).ok_or_else(|| {
            CurveError::invalid(
                &self.params.name,
                format!(
                    "{segment} slope is undefined between ({:e}, {}) and ({:e}, {})",
                    from.0, from.1, to.0, to.1
                ),
            )
        })
    }

    fn reduced_life_slope(&self, segment: &str, anchors: &CurveAnchors) -> Result<f64, CurveError> {
        self.slope(
            segment,
            (anchors.endurance_cycles, anchors.endurance_stress),
            (REDUCED_LIFE_CYCLES, REDUCED_LIFE_FACTOR * anchors.endurance_stress),
        )
    }

    fn root_stress(&self, n: f64, slopes: &CurveSlopes) -> Result<f64, CurveError> {
        let root = &self.params.root;
        if n <= root.static_cycles {
            return Ok(root.static_stress);
        }
        if n >= root.endurance_cycles {
            return match slopes.root_reduced_life {
                Some(slope) => reduced_life_stress(root.endurance_stress, n, slope, "root reduced-life stress"),
                None => Ok(root.endurance_stress),
            };
        }
        power_law_stress(root.endurance_stress, root.endurance_cycles, n, slopes.root, "root finite-life stress")
    }

    fn flank_stress(&self, n: f64, slopes: &CurveSlopes) -> Result<f64, CurveError> {
        let flank = &self.params.flank;
        if n <= flank.static_cycles {
            return Ok(flank.static_stress);
        }
        if n < flank.endurance_cycles {
            return match slopes.flank_limited_pitting {
                Some(_) if n <= LIMITED_PITTING_TRANSITION_CYCLES => power_law_stress(
                    self.limited_pitting_midpoint(),
                    LIMITED_PITTING_TRANSITION_CYCLES,
                    n,
                    slopes.flank,
                    "flank limited-pitting stress",
                ),
                Some(second) => power_law_stress(
                    flank.endurance_stress,
                    flank.endurance_cycles,
                    n,
                    second,
                    "flank limited-pitting stress",
                ),
                None => power_law_stress(
                    flank.endurance_stress,
                    flank.endurance_cycles,
                    n,
                    slopes.flank,
                    "flank finite-life stress",
                ),
            };
        }
        match slopes.flank_reduced_life {
            Some(slope) => reduced_life_stress(flank.endurance_stress, n, slope, "flank reduced-life stress"),
            None => Ok(flank.endurance_stress),
        }
    }
}

impl TryFrom<CurveRecord> for SnCurve {
    type Error = CurveError;

    /// Rebuild a curve from its raw fields; the record's slopes are ignored.
    fn try_from(record: CurveRecord) -> Result<Self, Self::Error> {
        SnCurve::new(SnCurveParams::from(&record))
    }
}

impl fmt::Display for SnCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SnCurve({}, {}, {})",
            self.params.name, self.params.root.static_cycles, self.params.root.endurance_cycles
        )
    }
}

fn reduced_life_stress(endurance_stress: f64, n: f64, slope: f64, what: &'static str) -> Result<f64, CurveError> {
    let floor = REDUCED_LIFE_FACTOR * endurance_stress;
    if n > REDUCED_LIFE_CYCLES {
        Ok(floor)
    } else {
        power_law_stress(floor, REDUCED_LIFE_CYCLES, n, slope, what)
    }
}

fn validate_anchors(name: &str, side: &str, anchors: &CurveAnchors) -> Result<(), CurveError> {
    let values = [
        ("static cycles", anchors.static_cycles),
        ("endurance cycles", anchors.endurance_cycles),
        ("static stress", anchors.static_stress),
        ("endurance stress", anchors.endurance_stress),
    ];
    for (label, value) in values {
        if !(value.is_finite() && value > 0.0) {
            return Err(CurveError::invalid(
                name,
                format!("{side} {label} must be a finite positive number, got {value}"),
            ));
        }
    }

    if anchors.static_cycles >= anchors.endurance_cycles {
        return Err(CurveError::invalid(
            name,
            format!(
                "{side} static cycles ({:e}) must be below endurance cycles ({:e})",
                anchors.static_cycles, anchors.endurance_cycles
            ),
        ));
    }
    if anchors.endurance_stress >= anchors.static_stress {
        return Err(CurveError::invalid(
            name,
            format!(
                "{side} endurance stress ({}) must be below static stress ({})",
                anchors.endurance_stress, anchors.static_stress
            ),
        ));
    }
    Ok(())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn anchors()(
            static_cycles in 1e2_f64..1e6,
            span in 2.0_f64..1e3,
            endurance_stress in 100.0_f64..2000.0,
            ratio in 1.05_f64..3.0,
        ) -> CurveAnchors {
            CurveAnchors::new(static_cycles, static_cycles * span, endurance_stress * ratio, endurance_stress)
        }
    }

    prop_compose! {
        fn valid_curve()(
            root in anchors(),
            flank in anchors(),
            limited_pitting in any::<bool>(),
            reduced_life_factor in any::<bool>(),
        ) -> SnCurve {
            let flank = if limited_pitting {
                CurveAnchors { endurance_cycles: LIMITED_PITTING_ENDURANCE_CYCLES, ..flank }
            } else {
                flank
            };
            SnCurve::new(SnCurveParams {
                name: "prop".to_string(),
                root,
                flank,
                limited_pitting,
                reduced_life_factor,
            })
            .expect("generated parameters are valid")
        }
    }

    proptest! {
        #[test]
        fn stress_is_non_increasing(curve in valid_curve(), exps in prop::collection::vec(0.0_f64..11.0, 2..40)) {
            let mut exps = exps;
            exps.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            let mut prev: Option<PermissibleStress> = None;
            for e in exps {
                let s = curve.permissible_stress(10f64.powf(e)).unwrap();
                prop_assert!(s.root.is_finite() && s.root > 0.0);
                prop_assert!(s.flank.is_finite() && s.flank > 0.0);
                if let Some(p) = prev {
                    prop_assert!(s.root <= p.root * (1.0 + 1e-9));
                    prop_assert!(s.flank <= p.flank * (1.0 + 1e-9));
                }
                prev = Some(s);
            }
        }

        #[test]
        fn static_limits_are_continuous(curve in valid_curve()) {
            for side in CurveSide::ALL {
                let a = *curve.anchors(side);
                let before = curve.permissible_stress(a.static_cycles * 0.999_999).unwrap().side(side);
                let after = curve.permissible_stress(a.static_cycles * 1.000_001).unwrap().side(side);
                prop_assert_eq!(before, a.static_stress);
                prop_assert!(nearly_equal(after, a.static_stress, 1e-4));
            }
        }

        #[test]
        fn record_round_trip_reproduces_slopes(curve in valid_curve()) {
            let rebuilt = SnCurve::try_from(curve.to_record().unwrap()).unwrap();
            prop_assert_eq!(rebuilt.slopes().unwrap(), curve.slopes().unwrap());
        }
    }
}
