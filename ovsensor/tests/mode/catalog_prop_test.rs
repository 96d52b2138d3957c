#[path = "../common/mod.rs"]
mod common;

use common::fixtures::MODES;
use ovsensor::sensor::{SensorMode, find_mode};
use ovsensor::Error;
use proptest::prelude::*;

fn distance(mode: &SensorMode, width: u32, height: u32) -> u32 {
    mode.width.abs_diff(width) + mode.height.abs_diff(height)
}

proptest! {
    #[test]
    fn nearest_fit_is_minimal_and_first(width in 0u32..5000, height in 0u32..4000) {
        let chosen = find_mode(&MODES, width, height, false).unwrap();
        let best = distance(chosen, width, height);
        let first = MODES.iter().position(|m| distance(m, width, height) == best).unwrap();
        prop_assert!(MODES.iter().all(|m| distance(m, width, height) >= best));
        prop_assert_eq!(chosen, &MODES[first]);
    }

    #[test]
    fn exact_search_only_accepts_catalog_sizes(width in 0u32..2000, height in 0u32..1000) {
        let listed = MODES.iter().any(|m| m.width == width && m.height == height);
        match find_mode(&MODES, width, height, true) {
            Ok(m) => {
                prop_assert!(listed);
                prop_assert_eq!((m.width, m.height), (width, height));
            }
            Err(Error::NotSupported { width: w, height: h }) => {
                prop_assert!(!listed);
                prop_assert_eq!((w, h), (width, height));
            }
            Err(other) => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}

#[cfg(all(feature = "ov8865", feature = "ov569x", feature = "ov7251"))]
mod builtin {
    use super::*;
    use ovsensor::SensorKind;
    use ovsensor::sensor::create_model_for;

    proptest! {
        #[test]
        fn every_builtin_catalog_answers(width in 1u32..4000, height in 1u32..3000) {
            for kind in [SensorKind::Ov8865, SensorKind::Ov569x, SensorKind::Ov7251] {
                let model = create_model_for(kind).unwrap();
                let mode = find_mode(model.modes(), width, height, false).unwrap();
                prop_assert!(model.modes().contains(mode));
            }
        }
    }
}

mod coupling {
    use super::common::fixtures::FixtureModel;
    use ovsensor::sensor::{ControlSet, SensorModel};
    use ovsensor::ControlId;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn exposure_bound_tracks_vblank(v in 20i64..2000, exposure in 4i64..900) {
            let model = FixtureModel;
            let mut controls = ControlSet::new(model.limits(), model.timing(), model.link_freqs(), &model.modes()[0]);
            let _ = controls.set(ControlId::Exposure, exposure);
            controls.set(ControlId::VerticalBlank, v).unwrap();
            let max = controls.range(ControlId::Exposure).max;
            prop_assert_eq!(max, 480 + v - 6);
            prop_assert!(controls.value(ControlId::Exposure) <= max);
        }
    }
}
