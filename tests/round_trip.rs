//! 상태량 간 왕복 변환 일관성 테스트.
use psychrometrics::air::{
    humidity_ratio_from_rh, humidity_ratio_from_wet_bulb, relative_humidity_from_humidity_ratio,
    relative_humidity_from_wet_bulb, solve_wet_bulb, WetBulbOptions,
};
use psychrometrics::Quantity;

const DRY_BULBS_C: [f64; 8] = [-20.0, -10.0, -0.5, 0.0, 10.0, 26.7, 40.0, 50.0];
const RHS_PCT: [f64; 5] = [5.0, 20.0, 50.0, 80.0, 95.0];

#[test]
fn relative_humidity_survives_humidity_ratio_round_trip() {
    for p_kpa in [101.325, 83.5] {
        let p = Quantity::kpa(p_kpa);
        for t_c in DRY_BULBS_C {
            for rh_pct in RHS_PCT {
                let t = Quantity::celsius(t_c);
                let w = humidity_ratio_from_rh(t, Quantity::percent(rh_pct), p).unwrap();
                let back = relative_humidity_from_humidity_ratio(t, w, p).unwrap();
                assert!(
                    (back.value() - rh_pct).abs() < 1e-9,
                    "t={t_c} rh={rh_pct} p={p_kpa}: got {}",
                    back.value()
                );
            }
        }
    }
}

#[test]
fn converged_wet_bulb_reproduces_target_humidity_ratio() {
    let options = WetBulbOptions::default();
    let p = Quantity::kpa(101.325);
    for t_c in DRY_BULBS_C {
        for rh_pct in RHS_PCT {
            let t = Quantity::celsius(t_c);
            let rh = Quantity::percent(rh_pct);
            let sol = solve_wet_bulb(t, rh, p, &options).unwrap();
            let Some(t_wb) = sol.temperature else {
                continue;
            };
            let target = humidity_ratio_from_rh(t, rh, p).unwrap().value();
            let w = humidity_ratio_from_wet_bulb(t, t_wb, p).unwrap().value();
            assert!(
                (w - target).abs() <= options.tolerance,
                "t={t_c} rh={rh_pct}: |{w} - {target}| > tol"
            );
            assert!(sol.iterations <= options.max_iter);
            assert!(t_wb.value() <= t_c + 1e-9, "wet bulb above dry bulb at t={t_c}");
        }
    }
}

#[test]
fn wet_bulb_and_relative_humidity_are_consistent() {
    let p = Quantity::kpa(101.325);
    let t = Quantity::celsius(35.0);
    let sol = solve_wet_bulb(t, Quantity::percent(30.0), p, &WetBulbOptions::default()).unwrap();
    let rh = relative_humidity_from_wet_bulb(t, sol.temperature.unwrap(), p).unwrap();
    assert!((rh.value() - 30.0).abs() < 0.1, "rh={}", rh.value());
}
