use sc_core::VehicleDraft;

fn draft(brand: &str, model: &str, availability: &str, rate: i128, description: &str) -> VehicleDraft {
    VehicleDraft {
        brand: brand.to_string(),
        model: model.to_string(),
        availability: availability.to_string(),
        description: Some(description.to_string()),
        rate,
    }
}

/// Vehicles a fresh demo ledger is seeded with.
pub fn demo_fleet() -> Vec<VehicleDraft> {
    vec![
        draft(
            "Toyota",
            "Corolla 2018",
            "Lun-Dom 08:00-20:00",
            7,
            "Reliable, economical sedan for the city.",
        ),
        draft(
            "Tesla",
            "Model 3",
            "Mar-Sab 09:00-18:00",
            18,
            "High-performance electric with Autopilot.",
        ),
        draft(
            "BMW",
            "X3 2020",
            "Lun-Vie 07:00-22:00",
            22,
            "Luxury SUV for comfortable trips.",
        ),
        draft(
            "Ford",
            "Mustang GT",
            "Sab-Dom 10:00-20:00",
            25,
            "American muscle car with a V8.",
        ),
        draft(
            "Nissan",
            "Urvan",
            "Lun-Dom 06:00-22:00",
            15,
            "Roomy passenger van for large groups.",
        ),
        draft(
            "Porsche",
            "911 Carrera",
            "Vie-Dom 12:00-20:00",
            45,
            "Iconic German sports car.",
        ),
    ]
}
