//! Color derivation: per-species display colors and the 6-stop ramps used
//! by the environmental overlay.

use ofw_core::subset::Variable;

/// Fill color for points whose species has no assigned color.
pub const DEFAULT_POINT_COLOR: &str = "#4aa8ff";

/// Ramp fractions for the 6 stops between observed min and max.
const STOP_FRACTIONS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// Temperature ramp: blue (cold) through green and yellow to red (hot).
const TEMPERATURE_STOPS: [&str; 6] = [
    "#0000ff", "#00ffff", "#00ff00", "#ffff00", "#ff8800", "#ff0000",
];

/// Salinity ramp: ColorBrewer-style blues (fresh) to reds (saline).
const SALINITY_STOPS: [&str; 6] = [
    "#2166ac", "#4393c3", "#92c5de", "#fddbc7", "#f4a582", "#d6604d",
];

/// The six ramp stop colors for a variable.
pub fn ramp_stops(variable: Variable) -> [&'static str; 6] {
    match variable {
        Variable::Thetao => TEMPERATURE_STOPS,
        Variable::So => SALINITY_STOPS,
    }
}

/// Deterministic HSL color for a species name: the common JS string hash
/// (`h = h * 31 + code` over UTF-16 units with i32 wrapping) mapped onto
/// hue/saturation/lightness, so colors stay stable across sessions and
/// views.
pub fn species_color(name: &str) -> String {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(unit as i32);
    }
    let hue = hash.unsigned_abs() % 360;
    let saturation = 60 + (hash >> 8).unsigned_abs() % 30;
    let lightness = 45 + (hash >> 16).unsigned_abs() % 20;
    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

fn parse_hex(color: &str) -> (f64, f64, f64) {
    let hex = color.trim_start_matches('#');
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(f64::from)
            .unwrap_or(0.0)
    };
    (channel(0), channel(2), channel(4))
}

fn lerp_hex(a: &str, b: &str, t: f64) -> String {
    let (ar, ag, ab) = parse_hex(a);
    let (br, bg, bb) = parse_hex(b);
    let mix = |x: f64, y: f64| (x + (y - x) * t).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(ar, br), mix(ag, bg), mix(ab, bb))
}

/// Hex color for `value` on the variable's ramp scaled over `[min, max]`.
/// Values outside the range clamp to the ramp ends; a degenerate range
/// (min == max) maps everything to the first stop.
pub fn color_for_value(value: f64, min: f64, max: f64, variable: Variable) -> String {
    let stops = ramp_stops(variable);
    if !(max > min) {
        return stops[0].to_string();
    }
    let t = ((value - min) / (max - min)).clamp(0.0, 1.0);

    let segment = (t / 0.2).floor().min(4.0) as usize;
    let local = (t - STOP_FRACTIONS[segment]) / 0.2;
    lerp_hex(stops[segment], stops[segment + 1], local)
}

/// MapLibre `interpolate` paint expression mapping cell values over
/// `[min, max]` onto the variable's 6-stop ramp. A degenerate range
/// collapses to a constant color (MapLibre rejects duplicate stops).
pub fn env_paint_expression(min: f64, max: f64, variable: Variable) -> serde_json::Value {
    let stops = ramp_stops(variable);
    if !(max > min) {
        return serde_json::Value::String(stops[0].to_string());
    }
    let mut expr = vec![
        serde_json::json!("interpolate"),
        serde_json::json!(["linear"]),
        serde_json::json!(["get", "value"]),
    ];
    for (fraction, color) in STOP_FRACTIONS.iter().zip(stops.iter()) {
        expr.push(serde_json::json!(min + (max - min) * fraction));
        expr.push(serde_json::json!(color));
    }
    serde_json::Value::Array(expr)
}

/// MapLibre `match` expression coloring points by their canonical species.
pub fn species_match_expression(species: &[String]) -> serde_json::Value {
    if species.is_empty() {
        return serde_json::Value::String(DEFAULT_POINT_COLOR.to_string());
    }
    let mut expr = vec![serde_json::json!("match"), serde_json::json!(["get", "species"])];
    for name in species {
        expr.push(serde_json::json!(name));
        expr.push(serde_json::json!(species_color(name)));
    }
    expr.push(serde_json::json!(DEFAULT_POINT_COLOR));
    serde_json::Value::Array(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_color_is_stable_and_in_range() {
        let a = species_color("Balaenoptera physalus");
        let b = species_color("Balaenoptera physalus");
        assert_eq!(a, b);
        assert!(a.starts_with("hsl("));
        assert_ne!(a, species_color("Megaptera novaeangliae"));
    }

    #[test]
    fn ramp_endpoints_hit_the_stop_colors() {
        assert_eq!(color_for_value(0.0, 0.0, 10.0, Variable::Thetao), "#0000ff");
        assert_eq!(color_for_value(10.0, 0.0, 10.0, Variable::Thetao), "#ff0000");
        assert_eq!(color_for_value(35.0, 30.0, 40.0, Variable::So), "#92c5de");
    }

    #[test]
    fn ramp_interpolates_between_stops() {
        // t = 0.1 sits halfway between #0000ff and #00ffff.
        assert_eq!(color_for_value(1.0, 0.0, 10.0, Variable::Thetao), "#0080ff");
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(color_for_value(-5.0, 0.0, 10.0, Variable::Thetao), "#0000ff");
        assert_eq!(color_for_value(50.0, 0.0, 10.0, Variable::Thetao), "#ff0000");
    }

    #[test]
    fn degenerate_range_is_a_constant() {
        assert_eq!(color_for_value(3.0, 3.0, 3.0, Variable::Thetao), "#0000ff");
        assert_eq!(
            env_paint_expression(3.0, 3.0, Variable::So),
            serde_json::json!("#2166ac")
        );
    }

    #[test]
    fn paint_expression_has_six_stops() {
        let expr = env_paint_expression(0.0, 10.0, Variable::Thetao);
        let arr = expr.as_array().unwrap();
        // 3 header elements + 6 (value, color) pairs
        assert_eq!(arr.len(), 3 + 12);
        assert_eq!(arr[0], "interpolate");
        assert_eq!(arr[3], serde_json::json!(0.0));
        assert_eq!(arr[4], "#0000ff");
        assert_eq!(arr[13], serde_json::json!(10.0));
        assert_eq!(arr[14], "#ff0000");
    }

    #[test]
    fn match_expression_lists_all_species() {
        let expr = species_match_expression(&["A".into(), "B".into()]);
        let arr = expr.as_array().unwrap();
        assert_eq!(arr[0], "match");
        assert_eq!(arr.len(), 2 + 4 + 1);
        assert_eq!(arr.last().unwrap(), DEFAULT_POINT_COLOR);

        assert_eq!(
            species_match_expression(&[]),
            serde_json::json!(DEFAULT_POINT_COLOR)
        );
    }

    #[test]
    fn match_expression_assigns_each_species_its_stable_color() {
        let species = vec![
            "Balaenoptera physalus".to_string(),
            "Phocoena phocoena".to_string(),
        ];
        let expr = species_match_expression(&species);
        let arr = expr.as_array().unwrap();
        assert_eq!(arr[1], serde_json::json!(["get", "species"]));
        assert_eq!(arr[2], "Balaenoptera physalus");
        assert_eq!(arr[3], species_color("Balaenoptera physalus").as_str());
        assert_eq!(arr[4], "Phocoena phocoena");
        assert_eq!(arr[5], species_color("Phocoena phocoena").as_str());
    }
}
