use padbind::profile::BindingProfile;
use padbind::{AxisId, AxisPolarity, BindingManager, ButtonId, GuestEvent, HostInput};

fn main() {
    let mut manager = BindingManager::new();
    manager.bind(
        HostInput::key("kbd", "Space"),
        GuestEvent::Button {
            controller: 0,
            button: ButtonId::A,
        },
    );
    manager.bind(
        HostInput::axis("045e:028e", 1, AxisPolarity::Negative),
        GuestEvent::Axis {
            controller: 0,
            axis: AxisId::LeftY,
            polarity: AxisPolarity::Negative,
        },
    );

    let profile = BindingProfile::from_map("default", &manager.snapshot());
    let path = std::env::temp_dir().join("padbind-demo.toml");
    profile.save_toml(&path).expect("save profile");
    println!("saved {}", path.display());

    let loaded = BindingProfile::load_toml(&path).expect("load profile");
    let map = loaded.to_map();
    println!("reloaded {} binding(s):", map.len());
    for (host, guest) in map.iter() {
        println!("  {host} -> {guest:?}");
    }

    std::fs::remove_file(&path).ok();
}
