//! 습구온도 반복 계산의 종료/실패 정책 테스트.
use psychrometrics::air::{solve_wet_bulb, wet_bulb, WetBulbOptions};
use psychrometrics::{PsychroError, Quantity, QuantityError};

fn design_point() -> (Quantity, Quantity, Quantity) {
    (
        Quantity::celsius(26.7),
        Quantity::percent(50.0),
        Quantity::kpa(101.325),
    )
}

#[test]
fn exhausted_budget_returns_none_when_unchecked() {
    let (t, rh, p) = design_point();
    for max_iter in [0, 1] {
        let options = WetBulbOptions {
            max_iter,
            ..WetBulbOptions::default()
        };
        assert_eq!(wet_bulb(t, rh, p, &options).unwrap(), None, "max_iter={max_iter}");
    }
}

#[test]
fn exhausted_budget_fails_when_checked() {
    let (t, rh, p) = design_point();
    let options = WetBulbOptions {
        max_iter: 1,
        checked: true,
        ..WetBulbOptions::default()
    };
    let err = wet_bulb(t, rh, p, &options).unwrap_err();
    match err {
        PsychroError::NotConverged {
            iterations,
            residual,
        } => {
            assert_eq!(iterations, 1);
            assert!(residual.abs() > options.tolerance);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn default_budget_is_enough_for_design_point() {
    let (t, rh, p) = design_point();
    let options = WetBulbOptions {
        checked: true,
        ..WetBulbOptions::default()
    };
    assert_eq!(options.max_iter, 5);
    assert_eq!(options.tolerance, 1e-5);
    let sol = solve_wet_bulb(t, rh, p, &options).unwrap();
    assert!(sol.converged());
    assert!(sol.iterations <= 5);
}

#[test]
fn budget_of_three_is_exactly_enough() {
    // 설계점은 갱신 3회 뒤 수렴한다. 갱신 횟수 = max_iter 까지 허용된다.
    let (t, rh, p) = design_point();
    let three = WetBulbOptions {
        max_iter: 3,
        ..WetBulbOptions::default()
    };
    let two = WetBulbOptions {
        max_iter: 2,
        ..WetBulbOptions::default()
    };
    assert!(wet_bulb(t, rh, p, &three).unwrap().is_some());
    assert!(wet_bulb(t, rh, p, &two).unwrap().is_none());
}

#[test]
fn tolerance_is_absolute_on_humidity_ratio() {
    // 초기값(tWB = tDB)의 습도비 차이는 약 0.01134 kg/kg 이다.
    // 상대오차로 보면 100 %가 넘지만 절대값 0.012 이내이므로 갱신 없이 바로 반환된다.
    let (t, rh, p) = design_point();
    let loose = WetBulbOptions {
        tolerance: 0.012,
        max_iter: 0,
        ..WetBulbOptions::default()
    };
    let sol = solve_wet_bulb(t, rh, p, &loose).unwrap();
    assert_eq!(sol.iterations, 0);
    assert_eq!(sol.temperature, Some(t));

    let tight = WetBulbOptions {
        tolerance: 0.011,
        max_iter: 0,
        ..WetBulbOptions::default()
    };
    assert!(!solve_wet_bulb(t, rh, p, &tight).unwrap().converged());
}

#[test]
fn unit_mismatch_propagates_immediately() {
    let (_, rh, p) = design_point();
    let err = wet_bulb(Quantity::kpa(26.7), rh, p, &WetBulbOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PsychroError::Quantity(QuantityError::IncompatibleUnit { .. })
    ));
}

#[test]
fn accepts_convertible_pressure_units() {
    let (t, rh, _) = design_point();
    let options = WetBulbOptions::default();
    let kpa = wet_bulb(t, rh, Quantity::kpa(101.325), &options).unwrap().unwrap();
    let atm = wet_bulb(
        t,
        rh,
        Quantity::new(1.0, psychrometrics::units::PressureUnit::Atm),
        &options,
    )
    .unwrap()
    .unwrap();
    assert!((kpa.value() - atm.value()).abs() < 1e-9);
}
