use randomness::num::{
    degrees_to_radians, digits_f64, digits_i64, radians_to_degrees,
};

#[test]
fn test_degrees_to_radians() {
    assert_eq!(degrees_to_radians(0.0), 0.0);
    assert!((degrees_to_radians(180.0) - std::f32::consts::PI).abs() < 1e-6);
    assert!((degrees_to_radians(-90.0) + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_radians_to_degrees() {
    assert_eq!(radians_to_degrees(0.0), 0.0);
    assert!((radians_to_degrees(std::f32::consts::PI) - 180.0).abs() < 1e-4);
}

#[test]
fn test_digits_of_integers() {
    assert_eq!(digits_i64(360), vec![3, 6, 0]);
    assert_eq!(digits_i64(0), vec![0]);
    assert_eq!(digits_i64(-15), vec![0, 1, 5]);
}

#[test]
fn test_digits_of_floats() {
    assert_eq!(digits_f64(1.25), vec![1, 0, 2, 5]);
    assert_eq!(digits_f64(-0.5), vec![0, 0, 0, 5]);
}
