use approx::assert_relative_eq;

use cantilever_core::calculations::{
    analyze, bending_stress, deflection, internal_forces, resolve_section, slope, CantileverInput,
};
use cantilever_core::materials::Material;
use cantilever_core::model::{BeamAxisSample, BeamSpec, LoadCase, Section};

// Reference bar: 1 m steel, 20 x 40 mm
const L: f64 = 1.0;
const F: f64 = 1000.0;
const E: f64 = 210e9;
const B: f64 = 0.02;
const H: f64 = 0.04;

fn input(a: f64, points: usize) -> CantileverInput {
    CantileverInput {
        label: format!("a = {}", a),
        beam: BeamSpec::new(L),
        section: Section::rectangular(B, H),
        material: Material::new(E),
        load: LoadCase::new(F, a),
        sample_points: points,
    }
}

#[test]
fn shear_has_single_step_at_load() {
    for &n in &[2, 3, 7, 50, 301] {
        for &a in &[0.0, 0.1, 0.35, 0.7, 0.99] {
            let result = analyze(&input(a, n)).unwrap();
            let x = result.axis.positions();
            let v = &result.fields.shear_n;

            for (i, &xi) in x.iter().enumerate() {
                let expected = if xi <= a { -F } else { 0.0 };
                assert_eq!(v[i], expected, "V({}) with a = {}, N = {}", xi, a, n);
            }

            let steps = v.windows(2).filter(|w| w[0] != w[1]).count();
            assert!(steps <= 1, "a = {}, N = {}: {} steps", a, n, steps);
        }
    }
}

#[test]
fn moment_is_continuous_and_vanishes_at_free_end() {
    let n = 400;
    for &a in &[0.0, 0.25, 0.7, 1.0] {
        let result = analyze(&input(a, n)).unwrap();
        let m = &result.fields.moment_nm;
        let h = result.axis.spacing();

        assert_relative_eq!(m[0], -F * a, epsilon = 1e-9);
        assert_eq!(m[n - 1], 0.0);

        // |dM/dx| ≤ F, so adjacent samples differ by at most F·h
        for w in m.windows(2) {
            assert!((w[1] - w[0]).abs() <= F * h * (1.0 + 1e-9));
        }
    }
}

#[test]
fn tip_load_moment_matches_general_formula() {
    let beam = BeamSpec::new(L);
    let axis = BeamAxisSample::new(&beam, 101).unwrap();
    let forces = internal_forces(&beam, &LoadCase::at_tip(F, &beam), &axis).unwrap();

    for (i, &x) in axis.positions().iter().enumerate() {
        assert_relative_eq!(forces.moment_nm[i], -F * (L - x), epsilon = 1e-9);
    }
}

#[test]
fn stress_to_moment_ratio_is_c_over_i() {
    let props = resolve_section(&Section::rectangular(B, H)).unwrap();
    let result = analyze(&input(0.6, 250)).unwrap();
    let ratio = props.outer_fiber_m / props.moment_of_inertia_m4;

    let m = &result.fields.moment_nm;
    let sigma = &result.fields.stress_pa;
    for i in 0..m.len() {
        if m[i] != 0.0 {
            assert_relative_eq!(sigma[i] / m[i], ratio, max_relative = 1e-12);
        } else {
            assert_eq!(sigma[i], 0.0);
        }
    }
}

#[test]
fn tip_deflection_matches_closed_form() {
    for &(l, f, e, b, h) in &[
        (1.0, 1000.0, 210e9, 0.02, 0.04),
        (2.5, 350.0, 68.9e9, 0.03, 0.06),
        (0.4, 12_000.0, 193e9, 0.05, 0.05),
    ] {
        let run = CantileverInput {
            label: String::new(),
            beam: BeamSpec::new(l),
            section: Section::rectangular(b, h),
            material: Material::new(e),
            load: LoadCase::at_tip(f, &BeamSpec::new(l)),
            sample_points: 120,
        };
        let result = analyze(&run).unwrap();
        let i = result.section.moment_of_inertia_m4;
        let y_tip = *result.fields.deflection_m.last().unwrap();

        assert_relative_eq!(y_tip.abs(), f * l.powi(3) / (3.0 * e * i), max_relative = 1e-9);
    }
}

#[test]
fn tip_deflection_magnitude_is_non_decreasing() {
    let result = analyze(&input(L, 500)).unwrap();
    for w in result.fields.deflection_m.windows(2) {
        assert!(w[1].abs() >= w[0].abs());
    }
}

#[test]
fn interior_reference_case() {
    let result = analyze(&input(0.7, 300)).unwrap();
    let x = result.axis.positions();

    assert_relative_eq!(result.fields.moment_nm[0], -700.0, epsilon = 1e-9);
    for (i, &xi) in x.iter().enumerate() {
        if xi > 0.7 {
            assert_eq!(result.fields.moment_nm[i], 0.0);
            assert_eq!(result.fields.shear_n[i], 0.0);
        } else {
            assert_eq!(result.fields.shear_n[i], -1000.0);
        }
    }
}

#[test]
fn tip_reference_values() {
    let props = resolve_section(&Section::rectangular(B, H)).unwrap();
    assert_relative_eq!(props.moment_of_inertia_m4, 1.0667e-7, max_relative = 1e-4);

    let result = analyze(&input(L, 300)).unwrap();
    assert_relative_eq!(result.summary.tip_deflection_m, -1.4881e-2, max_relative = 1e-4);
    assert_relative_eq!(result.summary.fixed_end_stress_pa, -1.875e8, max_relative = 1e-9);
    assert_relative_eq!(
        result.summary.tip_load_deflection_m.unwrap(),
        1.4881e-2,
        max_relative = 1e-4
    );
}

#[test]
fn load_at_support_leaves_beam_unloaded() {
    let result = analyze(&input(0.0, 64)).unwrap();
    let fields = &result.fields;
    for i in 1..result.axis.len() {
        assert_eq!(fields.shear_n[i], 0.0);
        assert_eq!(fields.moment_nm[i], 0.0);
        assert_eq!(fields.deflection_m[i], 0.0);
    }
}

#[test]
fn interior_deflection_continuous_at_load() {
    let beam = BeamSpec::new(L);
    let material = Material::new(E);
    let props = resolve_section(&Section::rectangular(B, H)).unwrap();
    let a = 0.5;
    let load = LoadCase::new(F, a);

    // 1001 samples put a sample on x = a and its neighbours 1 mm away
    let axis = BeamAxisSample::new(&beam, 1001).unwrap();
    let y = deflection(&beam, &load, &material, &props, &axis).unwrap();
    let theta = slope(&beam, &load, &material, &props, &axis).unwrap();
    let h = axis.spacing();

    let k = 500;
    assert_eq!(axis.positions()[k], a);
    let left = (y[k] - y[k - 1]) / h;
    let right = (y[k + 1] - y[k]) / h;
    assert_relative_eq!(left, theta[k], max_relative = 1e-2);
    assert_relative_eq!(right, theta[k], max_relative = 1e-9);
    let y_a = -F * a.powi(3) / (3.0 * E * props.moment_of_inertia_m4);
    assert_relative_eq!(y[k], y_a, max_relative = 1e-12);
}

#[test]
fn interior_deflection_converges_to_tip_formula() {
    let beam = BeamSpec::new(L);
    let material = Material::new(E);
    let props = resolve_section(&Section::rectangular(B, H)).unwrap();
    let axis = BeamAxisSample::new(&beam, 50).unwrap();
    let tip = deflection(&beam, &LoadCase::at_tip(F, &beam), &material, &props, &axis).unwrap();

    let mut last_gap = f64::INFINITY;
    for &a in &[0.9, 0.99, 0.999, 0.999_999] {
        let y = deflection(&beam, &LoadCase::new(F, a), &material, &props, &axis).unwrap();
        let gap = (y[49] - tip[49]).abs();
        assert!(gap < last_gap, "a = {}: gap {} did not shrink", a, gap);
        last_gap = gap;
    }
    assert!(last_gap / tip[49].abs() < 1e-5);
}

#[test]
fn slope_is_constant_beyond_load() {
    let result = analyze(&input(0.3, 200)).unwrap();
    let x = result.axis.positions();
    let beyond: Vec<f64> = x
        .iter()
        .zip(&result.fields.slope_rad)
        .filter(|(xi, _)| **xi > 0.3)
        .map(|(_, &t)| t)
        .collect();

    assert!(!beyond.is_empty());
    assert!(beyond.iter().all(|&t| t == beyond[0]));
    assert_relative_eq!(beyond[0], result.summary.tip_slope_rad);
}

#[test]
fn invalid_input_produces_no_output() {
    let bad = CantileverInput {
        material: Material::new(-1.0),
        ..input(0.5, 100)
    };
    let err = analyze(&bad).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
    assert!(!err.is_recoverable());

    let props = resolve_section(&Section::rectangular(B, H)).unwrap();
    assert!(bending_stress(&[-1.0], &props).is_ok());
}
