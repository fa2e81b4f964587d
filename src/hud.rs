use macroquad::prelude::*;

use crate::codec;
use crate::coefficients::{Axis, CoefficientVector};

const FONT_SIZE: f32 = 20.0;
const LINE_HEIGHT: f32 = 22.0;
const MARGIN: f32 = 12.0;

/// The four text slots shown over the point cloud. Equations and code change
/// on reset, the time line every frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hud {
    pub x_equation: String,
    pub y_equation: String,
    pub code: String,
    pub time: String,
}

impl Hud {
    pub fn new(coefficients: &CoefficientVector, t: f64) -> Self {
        let mut hud = Self::default();
        hud.set_coefficients(coefficients);
        hud.set_time(t);
        hud
    }

    pub fn set_coefficients(&mut self, coefficients: &CoefficientVector) {
        self.x_equation = format!("{} = {}", Axis::X.name(), coefficients.equation(Axis::X));
        self.y_equation = format!("{} = {}", Axis::Y.name(), coefficients.equation(Axis::Y));
        self.code = format!("Code: {}", codec::encode(coefficients));
    }

    pub fn set_time(&mut self, t: f64) {
        self.time = format!("t = {}", format_time(t));
    }

    pub fn lines(&self) -> [&str; 4] {
        [
            self.x_equation.as_str(),
            self.y_equation.as_str(),
            self.code.as_str(),
            self.time.as_str(),
        ]
    }

    pub fn draw(&self) {
        let backdrop = Color::new(0.0, 0.0, 0.0, 0.5);
        let widest = self
            .lines()
            .iter()
            .map(|line| measure_text(line, None, FONT_SIZE as u16, 1.0).width)
            .fold(0.0, f32::max);
        draw_rectangle(
            MARGIN / 2.0,
            MARGIN / 2.0,
            widest + MARGIN,
            LINE_HEIGHT * 4.0 + MARGIN / 2.0,
            backdrop,
        );
        for (i, line) in self.lines().iter().enumerate() {
            draw_text(line, MARGIN, MARGIN + LINE_HEIGHT * (i as f32 + 0.75), FONT_SIZE, WHITE);
        }
    }
}

pub fn format_time(t: f64) -> String {
    format!("{:.6}", t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::COEFFICIENT_COUNT;

    #[test]
    fn time_has_six_decimals() {
        assert_eq!(format_time(-3.0), "-3.000000");
        assert_eq!(format_time(0.1234567), "0.123457");
    }

    #[test]
    fn slots_follow_coefficients() {
        let mut values = [0; COEFFICIENT_COUNT];
        values[0] = 1;
        values[1] = -1;
        values[17] = 1;
        let c = CoefficientVector::new(values);
        let hud = Hud::new(&c, 0.5);
        assert_eq!(hud.x_equation, "x' = x² - y²");
        assert_eq!(hud.y_equation, "y' = t");
        assert_eq!(hud.code, format!("Code: {}", codec::encode(&c)));
        assert_eq!(hud.time, "t = 0.500000");
    }
}
