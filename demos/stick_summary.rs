use padbind::driver::{DriverPreference, DriverSettings};
use padbind::{
    AxisPolarity, BindingManager, ButtonId, GuestEvent, HostInput, SettingsRow, StickDescriptor,
    SummaryLabels,
};

fn main() {
    let pad = "045e:028e";
    let stick = StickDescriptor::left();

    // Bind the stick click and three of the four directions, leaving one
    // unbound to show the placeholder.
    let mut manager = BindingManager::new();
    manager.bind(
        HostInput::button(pad, 9),
        GuestEvent::Button {
            controller: 0,
            button: stick.button,
        },
    );
    for polarity in [AxisPolarity::Positive, AxisPolarity::Negative] {
        manager.bind(
            HostInput::axis(pad, 1, polarity),
            GuestEvent::Axis {
                controller: 0,
                axis: stick.y_axis,
                polarity,
            },
        );
    }
    manager.bind(
        HostInput::axis(pad, 0, AxisPolarity::Negative),
        GuestEvent::Axis {
            controller: 0,
            axis: stick.x_axis,
            polarity: AxisPolarity::Negative,
        },
    );

    let rows = vec![
        SettingsRow::Header {
            text: "Controller 1".to_string(),
        },
        SettingsRow::Button {
            controller: 0,
            button: ButtonId::A,
        },
        SettingsRow::Stick {
            controller: 0,
            stick,
        },
    ];

    // The display side works from an owned snapshot of the live table.
    let snapshot = manager.snapshot();
    let labels = SummaryLabels::default();
    for row in &rows {
        let content = row.bind(&snapshot, &labels);
        println!("{}", content.content);
        if let Some(subcontent) = content.subcontent {
            for line in subcontent.lines() {
                println!("  {line}");
            }
        }
    }

    let preference = DriverPreference::new(true);
    println!("GPU driver: {}", preference.summary(&DriverSettings::default()));
}
