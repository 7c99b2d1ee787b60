use rand::Rng;

// Sensor bounds for the random walk. Deliberately narrower than the
// hardware ranges so the dashboard sees plausible greenhouse conditions.
const TEMP_MIN: f64 = 15.0;
const TEMP_MAX: f64 = 35.0;
const TEMP_STEP: f64 = 1.0;

const HUMIDITY_MIN: f64 = 40.0;
const HUMIDITY_MAX: f64 = 90.0;
const HUMIDITY_STEP: f64 = 2.5;

const LUMINOSITY_MIN: i32 = 0;
const LUMINOSITY_MAX: i32 = 4095;
const LUMINOSITY_STEP: i32 = 200;

pub fn step_temperature<R: Rng>(current: f64, rng: &mut R) -> f64 {
    (current + rng.random_range(-TEMP_STEP..=TEMP_STEP)).clamp(TEMP_MIN, TEMP_MAX)
}

pub fn step_humidity<R: Rng>(current: f64, rng: &mut R) -> f64 {
    (current + rng.random_range(-HUMIDITY_STEP..=HUMIDITY_STEP)).clamp(HUMIDITY_MIN, HUMIDITY_MAX)
}

pub fn step_luminosity<R: Rng>(current: i32, rng: &mut R) -> i32 {
    (current + rng.random_range(-LUMINOSITY_STEP..=LUMINOSITY_STEP))
        .clamp(LUMINOSITY_MIN, LUMINOSITY_MAX)
}
