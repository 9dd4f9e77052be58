//! Axis helpers shared by the cartesian charts.

/// Round `range / target_steps` up to 1, 2 or 5 times a power of ten.
pub fn nice_step(range: f64, target_steps: usize) -> f64 {
    if range <= 0.0 || target_steps == 0 {
        return 1.0;
    }
    let raw_step = range / target_steps as f64;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;

    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}

/// Tick values from `min` to `max` inclusive.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut i = (min / step).ceil() as i64;
    loop {
        let value = i as f64 * step;
        if value > max + step * 1e-9 {
            break;
        }
        values.push(value);
        i += 1;
    }
    values
}

/// Map a value onto a vertical pixel span where `bottom` shows `min`.
pub fn map_y(val: f64, min: f64, max: f64, top: i32, bottom: i32) -> i32 {
    let ratio = (val - min) / (max - min);
    bottom - (ratio * (bottom - top) as f64).round() as i32
}
