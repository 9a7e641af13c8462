use std::f64::consts::PI;

use uom::si::f64::{Area, Length, Volume};

use super::input::{PanelOutline, TankShape};

/// Areas and volume derived from the panel and tank dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Collector area exposed to the solar flux.
    pub panel_area: Area,

    /// Fluid volume held by the tank.
    pub tank_volume: Volume,

    /// Lateral wall area of the tank cylinder, through which heat is lost.
    pub tank_wall_area: Area,
}

pub(super) fn resolve_geometry(panel: &PanelOutline, tank: &TankShape) -> Geometry {
    let height = tank.height.get();
    let diameter = tank.diameter.get();

    Geometry {
        panel_area: panel_area(panel),
        tank_volume: disc_area(diameter) * height,
        tank_wall_area: diameter * height * PI,
    }
}

fn panel_area(panel: &PanelOutline) -> Area {
    match panel {
        PanelOutline::Rectangle { width, length } => width.get() * length.get(),
        PanelOutline::Circle { diameter } => disc_area(diameter.get()),
    }
}

fn disc_area(diameter: Length) -> Area {
    let radius = diameter / 2.0;
    radius * radius * PI
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        length::meter,
        volume::{cubic_meter, liter},
    };

    use crate::models::solar::collector_tank::core::{PanelShape, test_support::example_input};

    #[test]
    fn rectangular_panel_area_is_width_times_length() {
        let geometry = example_input().geometry().unwrap();
        assert_relative_eq!(geometry.panel_area.get::<square_meter>(), 6.0);
    }

    #[test]
    fn circular_panel_area_is_pi_r_squared() {
        let mut input = example_input();
        input.panel.shape = PanelShape::Circle {
            diameter: Length::new::<meter>(2.0),
        };

        let geometry = input.geometry().unwrap();
        assert_relative_eq!(geometry.panel_area.get::<square_meter>(), PI);
    }

    #[test]
    fn panel_area_grows_with_each_dimension() {
        let area = |width: f64, length: f64| {
            let mut input = example_input();
            input.panel.shape = PanelShape::Rectangle {
                width: Length::new::<meter>(width),
                length: Length::new::<meter>(length),
            };
            input.geometry().unwrap().panel_area.get::<square_meter>()
        };

        assert!(area(2.5, 3.0) > area(2.0, 3.0));
        assert!(area(2.0, 3.5) > area(2.0, 3.0));

        let disc = |diameter: f64| {
            let mut input = example_input();
            input.panel.shape = PanelShape::Circle {
                diameter: Length::new::<meter>(diameter),
            };
            input.geometry().unwrap().panel_area.get::<square_meter>()
        };
        assert!(disc(1.1) > disc(1.0));
    }

    #[test]
    fn tank_capacity_and_wall_area() {
        let geometry = example_input().geometry().unwrap();

        assert_relative_eq!(geometry.tank_volume.get::<cubic_meter>(), PI / 4.0);
        assert_relative_eq!(geometry.tank_volume.get::<liter>(), 785.398_163, epsilon = 1e-6);
        assert_relative_eq!(geometry.tank_wall_area.get::<square_meter>(), PI);
    }

    #[test]
    fn halving_height_halves_capacity() {
        let full = example_input().geometry().unwrap();

        let mut input = example_input();
        input.tank.height = input.tank.height / 2.0;
        let half = input.geometry().unwrap();

        assert_relative_eq!(
            half.tank_volume.get::<cubic_meter>(),
            full.tank_volume.get::<cubic_meter>() / 2.0
        );
    }
}
