//! Small slice of the Berlin network shared by the finder tests.

use crate::reference::ReferenceData;

pub fn network() -> ReferenceData {
    ReferenceData::builder()
        .line(
            "U8",
            &[
                "Osloer Straße",
                "Gesundbrunnen",
                "Alexanderplatz",
                "Jannowitzbrücke",
                "Kottbusser Tor",
                "Hermannplatz",
                "Boddinstraße",
                "Leinestraße",
                "Hermannstraße",
            ],
        )
        .line(
            "U7",
            &[
                "Mehringdamm",
                "Südstern",
                "Hermannplatz",
                "Rathaus Neukölln",
                "Karl-Marx-Straße",
                "Neukölln",
                "Grenzallee",
            ],
        )
        .line(
            "S41",
            &[
                "Südkreuz",
                "Tempelhof",
                "Hermannstraße",
                "Neukölln",
                "Sonnenallee",
                "Treptower Park",
                "Ostkreuz",
            ],
        )
        .line_aliases("S41", &["ring bahn"])
        .station("Alexanderplatz", &["alex"])
        .station("Kottbusser Tor", &["kotti"])
        .station("Hermannstraße", &["hermannstr"])
        .station("Boddinstraße", &["boddinstr"])
        .station("Park", &[])
        .station("Parkstraße", &[])
        .build()
        .expect("fixture network is valid")
}
