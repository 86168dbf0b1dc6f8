use bevy::prelude::*;

/// System sets for the per-frame flashlight pipeline.
/// Chained in the order they are declared by [`configure`].
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlashlightSet {
    /// Keyboard handling that turns key presses into requests
    Input,
    /// Power requests and power notifications
    Power,
    /// Blink state machines and burst notifications
    Blink,
    /// Listeners reacting to power and burst notifications (audio)
    Reactions,
}

pub fn configure(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FlashlightSet::Input,
            FlashlightSet::Power,
            FlashlightSet::Blink,
            FlashlightSet::Reactions,
        )
            .chain(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::app::App;

    #[test]
    fn test_flashlight_set_derives_required_traits() {
        let power = FlashlightSet::Power;
        assert_eq!(power, power.clone());
        assert_ne!(FlashlightSet::Power, FlashlightSet::Blink);

        let debug_str = format!("{:?}", FlashlightSet::Reactions);
        assert!(debug_str.contains("Reactions"));

        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(FlashlightSet::Input);
        set.insert(FlashlightSet::Power);
        set.insert(FlashlightSet::Blink);
        set.insert(FlashlightSet::Reactions);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn test_sets_run_in_declared_order() {
        #[derive(Resource, Default)]
        struct Order(Vec<&'static str>);

        fn input(mut order: ResMut<Order>) {
            order.0.push("input");
        }
        fn power(mut order: ResMut<Order>) {
            order.0.push("power");
        }
        fn blink(mut order: ResMut<Order>) {
            order.0.push("blink");
        }
        fn reactions(mut order: ResMut<Order>) {
            order.0.push("reactions");
        }

        let mut app = App::new();
        app.init_resource::<Order>();
        configure(&mut app);

        // Registered out of order on purpose
        app.add_systems(Update, reactions.in_set(FlashlightSet::Reactions));
        app.add_systems(Update, blink.in_set(FlashlightSet::Blink));
        app.add_systems(Update, input.in_set(FlashlightSet::Input));
        app.add_systems(Update, power.in_set(FlashlightSet::Power));

        app.update();

        assert_eq!(
            app.world().resource::<Order>().0,
            vec!["input", "power", "blink", "reactions"]
        );
    }
}
