//! Curated calendar tables for 2025
//!
//! Hand-curated Romanian Orthodox data for one calendar year: the fixed
//! great feasts, the saint commemorations with large pilgrimages attached,
//! and the four fasting seasons. Compiled once as constants; nothing here
//! changes at runtime.

use crate::domain::fasting::{FastingPeriod, Strictness};
use crate::domain::feast::{Feast, FeastKind};

pub(crate) const FEASTS: &[Feast] = &[
    Feast {
        id: 1,
        date: "2025-01-01",
        name: "Circumcision of the Lord and St. Basil the Great",
        name_ro: "Tăierea împrejur a Domnului și Sf. Vasile cel Mare",
        kind: FeastKind::Minor,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 2,
        date: "2025-01-06",
        name: "Theophany",
        name_ro: "Botezul Domnului (Boboteaza)",
        kind: FeastKind::Major,
        description: Some("Great blessing of the waters."),
        places: &["Israel", "Iordan"],
        fasting: false,
    },
    Feast {
        id: 3,
        date: "2025-01-07",
        name: "Synaxis of St. John the Baptist",
        name_ro: "Soborul Sf. Ioan Botezătorul",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 4,
        date: "2025-01-30",
        name: "Three Holy Hierarchs",
        name_ro: "Sfinții Trei Ierarhi Vasile, Grigorie și Ioan",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 5,
        date: "2025-02-02",
        name: "Presentation of the Lord",
        name_ro: "Întâmpinarea Domnului",
        kind: FeastKind::Major,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 6,
        date: "2025-03-25",
        name: "Annunciation",
        name_ro: "Buna Vestire",
        kind: FeastKind::Major,
        description: Some("Fish dispensation inside Great Lent."),
        places: &["Nazaret"],
        fasting: false,
    },
    Feast {
        id: 7,
        date: "2025-04-13",
        name: "Palm Sunday",
        name_ro: "Intrarea Domnului în Ierusalim (Floriile)",
        kind: FeastKind::Major,
        description: None,
        places: &["Ierusalim"],
        fasting: false,
    },
    Feast {
        id: 8,
        date: "2025-04-18",
        name: "Good Friday",
        name_ro: "Vinerea Mare",
        kind: FeastKind::Major,
        description: Some("Strictest fast of the year."),
        places: &["Ierusalim"],
        fasting: true,
    },
    Feast {
        id: 9,
        date: "2025-04-20",
        name: "Pascha",
        name_ro: "Învierea Domnului (Sfintele Paști)",
        kind: FeastKind::Major,
        description: Some("The feast of feasts."),
        places: &["Ierusalim", "Israel"],
        fasting: false,
    },
    Feast {
        id: 10,
        date: "2025-04-23",
        name: "St. George the Great Martyr",
        name_ro: "Sf. Mare Mucenic Gheorghe",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 11,
        date: "2025-05-21",
        name: "Sts. Constantine and Helen",
        name_ro: "Sf. Împărați Constantin și Elena",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 12,
        date: "2025-06-05",
        name: "Ascension of the Lord",
        name_ro: "Înălțarea Domnului",
        kind: FeastKind::Major,
        description: None,
        places: &["Ierusalim", "Israel"],
        fasting: false,
    },
    Feast {
        id: 13,
        date: "2025-06-15",
        name: "Pentecost",
        name_ro: "Pogorârea Sfântului Duh (Rusaliile)",
        kind: FeastKind::Major,
        description: None,
        places: &["Israel"],
        fasting: false,
    },
    Feast {
        id: 14,
        date: "2025-06-24",
        name: "Nativity of St. John the Baptist",
        name_ro: "Nașterea Sf. Ioan Botezătorul (Sânzienele)",
        kind: FeastKind::Minor,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 15,
        date: "2025-06-29",
        name: "Sts. Peter and Paul",
        name_ro: "Sf. Apostoli Petru și Pavel",
        kind: FeastKind::Major,
        description: None,
        places: &["Roma"],
        fasting: false,
    },
    Feast {
        id: 16,
        date: "2025-07-20",
        name: "Holy Prophet Elijah",
        name_ro: "Sf. Proroc Ilie Tesviteanul",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 17,
        date: "2025-08-06",
        name: "Transfiguration",
        name_ro: "Schimbarea la Față",
        kind: FeastKind::Major,
        description: Some("Fish dispensation inside the Dormition Fast."),
        places: &["Muntele Tabor"],
        fasting: false,
    },
    Feast {
        id: 18,
        date: "2025-08-15",
        name: "Dormition of the Theotokos",
        name_ro: "Adormirea Maicii Domnului",
        kind: FeastKind::Major,
        description: Some("Closes the Dormition Fast; the largest pilgrimage day of the summer."),
        places: &["Nicula", "Ierusalim"],
        fasting: false,
    },
    Feast {
        id: 19,
        date: "2025-08-29",
        name: "Beheading of St. John the Baptist",
        name_ro: "Tăierea Capului Sf. Ioan Botezătorul",
        kind: FeastKind::Minor,
        description: Some("Kept as a strict fast whatever the weekday."),
        places: &[],
        fasting: true,
    },
    Feast {
        id: 20,
        date: "2025-09-08",
        name: "Nativity of the Theotokos",
        name_ro: "Nașterea Maicii Domnului (Sfânta Maria Mică)",
        kind: FeastKind::Major,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 21,
        date: "2025-09-14",
        name: "Elevation of the Holy Cross",
        name_ro: "Înălțarea Sfintei Cruci",
        kind: FeastKind::Major,
        description: Some("Kept as a strict fast whatever the weekday."),
        places: &[],
        fasting: true,
    },
    Feast {
        id: 22,
        date: "2025-10-14",
        name: "St. Parascheva of Iasi",
        name_ro: "Sf. Cuvioasa Parascheva",
        kind: FeastKind::Saint,
        description: Some("The largest Romanian pilgrimage of the year."),
        places: &["Iași"],
        fasting: false,
    },
    Feast {
        id: 23,
        date: "2025-10-26",
        name: "St. Demetrius the Great Martyr",
        name_ro: "Sf. Mare Mucenic Dimitrie, Izvorâtorul de Mir",
        kind: FeastKind::Saint,
        description: None,
        places: &["Tesalonic"],
        fasting: false,
    },
    Feast {
        id: 24,
        date: "2025-10-27",
        name: "St. Demetrius the New",
        name_ro: "Sf. Cuvios Dimitrie cel Nou, Ocrotitorul Bucureștilor",
        kind: FeastKind::Saint,
        description: None,
        places: &["București"],
        fasting: false,
    },
    Feast {
        id: 25,
        date: "2025-11-08",
        name: "Synaxis of the Archangels Michael and Gabriel",
        name_ro: "Soborul Sf. Arhangheli Mihail și Gavriil",
        kind: FeastKind::Minor,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 26,
        date: "2025-11-21",
        name: "Entry of the Theotokos into the Temple",
        name_ro: "Intrarea Maicii Domnului în Biserică",
        kind: FeastKind::Major,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 27,
        date: "2025-11-30",
        name: "St. Andrew the Apostle",
        name_ro: "Sf. Apostol Andrei, Ocrotitorul României",
        kind: FeastKind::Saint,
        description: Some("Patron of Romania."),
        places: &["Peștera Sfântului Andrei", "Dobrogea"],
        fasting: false,
    },
    Feast {
        id: 28,
        date: "2025-12-06",
        name: "St. Nicholas",
        name_ro: "Sf. Ierarh Nicolae",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 29,
        date: "2025-12-25",
        name: "Nativity of the Lord",
        name_ro: "Nașterea Domnului (Crăciunul)",
        kind: FeastKind::Major,
        description: None,
        places: &["Betleem"],
        fasting: false,
    },
    Feast {
        id: 30,
        date: "2025-12-26",
        name: "Synaxis of the Theotokos",
        name_ro: "Soborul Maicii Domnului",
        kind: FeastKind::Minor,
        description: None,
        places: &[],
        fasting: false,
    },
    Feast {
        id: 31,
        date: "2025-12-27",
        name: "St. Stephen the Protomartyr",
        name_ro: "Sf. Arhidiacon Ștefan",
        kind: FeastKind::Saint,
        description: None,
        places: &[],
        fasting: false,
    },
];

pub(crate) const FASTING_PERIODS: &[FastingPeriod] = &[
    FastingPeriod {
        id: 1,
        name: "Great Lent",
        name_ro: "Postul Mare (Postul Sfintelor Paști)",
        start: "2025-03-03",
        end: "2025-04-19",
        description: Some("The forty days and Holy Week before Pascha."),
        strictness: Strictness::Strict,
    },
    FastingPeriod {
        id: 2,
        name: "Apostles' Fast",
        name_ro: "Postul Sfinților Apostoli",
        start: "2025-06-16",
        end: "2025-06-28",
        description: None,
        strictness: Strictness::Relaxed,
    },
    FastingPeriod {
        id: 3,
        name: "Dormition Fast",
        name_ro: "Postul Adormirii Maicii Domnului",
        start: "2025-08-01",
        end: "2025-08-14",
        description: None,
        strictness: Strictness::Strict,
    },
    FastingPeriod {
        id: 4,
        name: "Nativity Fast",
        name_ro: "Postul Nașterii Domnului (Postul Crăciunului)",
        start: "2025-11-15",
        end: "2025-12-24",
        description: Some("Forty days before Christmas."),
        strictness: Strictness::Relaxed,
    },
];
