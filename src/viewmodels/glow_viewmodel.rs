// ============================================================================
// GLOW VIEWMODEL - Suavizado exponencial del cursor
// ============================================================================

/// Punto normalizado en [0,1] x [0,1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const CENTER: Point = Point { x: 0.5, y: 0.5 };

    #[cfg(test)]
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

#[derive(Debug, Clone)]
pub struct GlowViewModel {
    target: Point,
    current: Point,
    damping: f64,
}

impl GlowViewModel {
    pub fn new(damping: f64) -> Self {
        Self {
            target: Point::CENTER,
            current: Point::CENTER,
            damping,
        }
    }

    #[cfg(test)]
    pub fn target(&self) -> Point {
        self.target
    }

    #[cfg(test)]
    pub fn current(&self) -> Point {
        self.current
    }

    /// Posición del puntero en px relativa al viewport
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.target = Point {
            x: (client_x / width).clamp(0.0, 1.0),
            y: (client_y / height).clamp(0.0, 1.0),
        };
    }

    /// Solo se recentra el objetivo; la posición vuelve sola frame a frame
    pub fn pointer_left(&mut self) {
        self.target = Point::CENTER;
    }

    /// Un frame: acerca `current` una fracción fija de lo que falta
    pub fn tick(&mut self) -> Point {
        self.current.x += (self.target.x - self.current.x) * self.damping;
        self.current.y += (self.target.y - self.current.y) * self.damping;
        self.current
    }

    /// Valores para `--cursor-x` / `--cursor-y`
    pub fn css_values(&self) -> (String, String) {
        (
            format!("{:.2}%", self.current.x * 100.0),
            format!("{:.2}%", self.current.y * 100.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-4;

    #[test]
    fn converges_to_fixed_target() {
        let mut vm = GlowViewModel::new(0.12);
        vm.pointer_moved(200.0, 600.0, 800.0, 800.0);
        for _ in 0..200 {
            vm.tick();
        }
        assert!(vm.current().distance(Point { x: 0.25, y: 0.75 }) < EPSILON);
    }

    #[test]
    fn each_tick_closes_damping_fraction_of_the_gap() {
        let mut vm = GlowViewModel::new(0.12);
        vm.pointer_moved(1000.0, 500.0, 1000.0, 1000.0);
        let p = vm.tick();
        assert!((p.x - (0.5 + 0.5 * 0.12)).abs() < 1e-12);
        assert!((p.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn leaving_drifts_back_to_center_without_snapping() {
        let mut vm = GlowViewModel::new(0.12);
        vm.pointer_moved(0.0, 0.0, 1000.0, 1000.0);
        for _ in 0..100 {
            vm.tick();
        }
        vm.pointer_left();
        assert_eq!(vm.target(), Point::CENTER);
        let after_one = vm.tick();
        assert!(after_one.distance(Point::CENTER) > 0.1);
        for _ in 0..200 {
            vm.tick();
        }
        assert!(vm.current().distance(Point::CENTER) < EPSILON);
    }

    #[test]
    fn zero_sized_viewport_is_ignored() {
        let mut vm = GlowViewModel::new(0.12);
        vm.pointer_moved(10.0, 10.0, 0.0, 0.0);
        assert_eq!(vm.target(), Point::CENTER);
    }

    #[test]
    fn css_values_are_percentages_with_two_decimals() {
        let mut vm = GlowViewModel::new(1.0);
        vm.pointer_moved(375.0, 123.4, 1000.0, 1000.0);
        vm.tick();
        assert_eq!(vm.css_values(), ("37.50%".to_string(), "12.34%".to_string()));
    }
}
