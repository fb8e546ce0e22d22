//! Bundled sample catalog so the binary is usable without a data file,
//! the same way the original archive ships its collection in-process.

use arkiv::catalog::Catalog;
use arkiv::model::Item;
use once_cell::sync::Lazy;

static SAMPLE_ITEMS: Lazy<Vec<Item>> = Lazy::new(|| {
    let mut items = vec![
        Item::new("Tidal Interference", 2024, "Video"),
        Item::new("Greenhouse Letters", 2024, "Photography"),
        Item::new("Salt Meridian", 2023, "Oil on canvas"),
        Item::new("Night Shift Chorus", 2023, "Audio installation"),
        Item::new("Concrete Orchard", 2023, "Sculpture"),
        Item::new("Border Static", 2022, "Video"),
        Item::new("Paper Moons", 2022, "Screen print"),
        Item::new("The Cartographer's Kitchen", 2022, "Photography"),
        Item::new("Low Resolution Prayer", 2021, "Video"),
        Item::new("Harvest Argument", 2021, "Oil on canvas"),
        Item::new("Signal Garden", 2021, "Audio installation"),
        Item::new("Eight Winters", 2021, "Photography"),
        Item::new("Counting Room", 2020, "Sculpture"),
        Item::new("Dust Calendar", 2020, "Photography"),
        Item::new("Slow News", 2020, "Video"),
        Item::new("Inventory of Small Storms", 2020, "Screen print"),
        Item::new("Glass Weather", 2019, "Oil on canvas"),
        Item::new("Receiver", 2019, "Sculpture"),
        Item::new("Archive Fever Dream", 2019, "Video"),
        Item::new("Margin Walker", 2019, "Photography"),
    ];

    // Flagged entries for the viewer-discretion gate.
    items[5].sensitive = true;
    items[18].sensitive = true;
    items
});

pub(crate) fn catalog() -> Catalog {
    Catalog::new(SAMPLE_ITEMS.clone())
}
