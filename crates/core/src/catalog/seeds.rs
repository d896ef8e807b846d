use crate::domain::product::{Availability, Category, Mood};

#[derive(Debug, Clone, Copy)]
pub(super) struct ProductSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub category: Category,
    pub mood: Mood,
    pub notes: &'static [&'static str],
    pub story: &'static str,
    pub availability: Availability,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct CollectionSeed {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub product_ids: &'static [&'static str],
}

pub(super) const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "royal-oud",
        name: "Royal Oud",
        description: "Aged Cambodian oud wrapped in saffron and smoked leather.",
        price: 28_500,
        category: Category::OudRich,
        mood: Mood::Mysterious,
        notes: &["saffron", "cambodian oud", "leather", "sandalwood"],
        story: "Distilled from trees left to rest for two decades, bottled in small batches.",
        availability: Availability::InStock,
        featured: true,
    },
    ProductSeed {
        id: "midnight-agarwood",
        name: "Midnight Agarwood",
        description: "A nocturnal blend of agarwood, incense and black pepper.",
        price: 24_000,
        category: Category::OudRich,
        mood: Mood::Mysterious,
        notes: &["black pepper", "incense", "agarwood", "vetiver"],
        story: "Composed after a night walk through an old spice market.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "oud-rose-nocturne",
        name: "Oud Rose Nocturne",
        description: "Taif rose folded into a dark oud heart.",
        price: 26_500,
        category: Category::OudRich,
        mood: Mood::Romantic,
        notes: &["taif rose", "oud", "patchouli", "amber"],
        story: "A love letter between the rose fields of Taif and the forests of Assam.",
        availability: Availability::Limited,
        featured: true,
    },
    ProductSeed {
        id: "smoked-cedar-oud",
        name: "Smoked Cedar Oud",
        description: "Birch tar and cedar over a dry oud base.",
        price: 21_000,
        category: Category::OudRich,
        mood: Mood::Mysterious,
        notes: &["birch tar", "cedar", "oud", "cypriol"],
        story: "Inspired by campfires in the Atlas mountains.",
        availability: Availability::OutOfStock,
        featured: false,
    },
    ProductSeed {
        id: "amber-sultan",
        name: "Amber Sultan",
        description: "Golden labdanum, benzoin and warm spices.",
        price: 19_500,
        category: Category::AmberGold,
        mood: Mood::Romantic,
        notes: &["cardamom", "labdanum", "benzoin", "vanilla"],
        story: "Named for the amber caravans that crossed the desert at dusk.",
        availability: Availability::InStock,
        featured: true,
    },
    ProductSeed {
        id: "golden-resin",
        name: "Golden Resin",
        description: "Frankincense and myrrh softened by honeyed amber.",
        price: 17_500,
        category: Category::AmberGold,
        mood: Mood::Mysterious,
        notes: &["frankincense", "myrrh", "honey", "amber"],
        story: "Resins gathered from Dhofar and warmed for three days before blending.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "desert-dusk",
        name: "Desert Dusk",
        description: "Sun-baked amber with a trace of tobacco leaf.",
        price: 18_000,
        category: Category::AmberGold,
        mood: Mood::Romantic,
        notes: &["tobacco leaf", "amber", "tonka", "cistus"],
        story: "The last light over the dunes, held in a bottle.",
        availability: Availability::Limited,
        featured: false,
    },
    ProductSeed {
        id: "saffron-amber",
        name: "Saffron Amber",
        description: "Saffron threads laid over a glowing amber accord.",
        price: 22_000,
        category: Category::AmberGold,
        mood: Mood::Romantic,
        notes: &["saffron", "rose", "amber", "musk"],
        story: "A tribute to the saffron harvest, picked by hand at dawn.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "jasmine-dawn",
        name: "Jasmine Dawn",
        description: "Dew-soaked jasmine sambac with green tea.",
        price: 15_500,
        category: Category::FloralFresh,
        mood: Mood::Fresh,
        notes: &["bergamot", "green tea", "jasmine sambac", "white musk"],
        story: "Jasmine picked before sunrise, when the flowers are most fragrant.",
        availability: Availability::InStock,
        featured: true,
    },
    ProductSeed {
        id: "white-gardenia",
        name: "White Gardenia",
        description: "Creamy gardenia with pear and soft musk.",
        price: 16_000,
        category: Category::FloralFresh,
        mood: Mood::Romantic,
        notes: &["pear", "gardenia", "tuberose", "musk"],
        story: "A wedding bouquet reimagined as a skin scent.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "citrus-bloom",
        name: "Citrus Bloom",
        description: "Neroli and blood orange over orange blossom.",
        price: 13_500,
        category: Category::FloralFresh,
        mood: Mood::Fresh,
        notes: &["blood orange", "neroli", "orange blossom", "petitgrain"],
        story: "Mediterranean groves in full bloom.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "rose-petal-mist",
        name: "Rose Petal Mist",
        description: "Airy rose and lychee in a sheer veil.",
        price: 14_500,
        category: Category::FloralFresh,
        mood: Mood::Playful,
        notes: &["lychee", "rose", "peony", "cedar"],
        story: "A garden party on the first warm day of spring.",
        availability: Availability::Limited,
        featured: false,
    },
    ProductSeed {
        id: "vanilla-noir",
        name: "Vanilla Noir",
        description: "Bourbon vanilla darkened with rum and smoked wood.",
        price: 18_500,
        category: Category::GourmandUnique,
        mood: Mood::Mysterious,
        notes: &["dark rum", "bourbon vanilla", "guaiac wood", "tonka"],
        story: "Vanilla pods cured in rum barrels for a full season.",
        availability: Availability::InStock,
        featured: true,
    },
    ProductSeed {
        id: "caramel-oud",
        name: "Caramel Oud",
        description: "Salted caramel meeting a gentle oud.",
        price: 20_500,
        category: Category::GourmandUnique,
        mood: Mood::Playful,
        notes: &["salted caramel", "praline", "oud", "benzoin"],
        story: "A dessert course from a night in Dubai.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "honey-tobacco",
        name: "Honey Tobacco",
        description: "Golden honey and pipe tobacco with dried fruit.",
        price: 19_000,
        category: Category::GourmandUnique,
        mood: Mood::Romantic,
        notes: &["dried plum", "honey", "pipe tobacco", "vanilla"],
        story: "An old library with a jar of honey on the desk.",
        availability: Availability::OutOfStock,
        featured: false,
    },
    ProductSeed {
        id: "cocoa-spice",
        name: "Cocoa Spice",
        description: "Bitter cocoa, cinnamon and pink pepper.",
        price: 16_500,
        category: Category::GourmandUnique,
        mood: Mood::Playful,
        notes: &["pink pepper", "cinnamon", "cocoa", "sandalwood"],
        story: "Hot chocolate spiced the way it was served in Oaxaca.",
        availability: Availability::Limited,
        featured: false,
    },
    ProductSeed {
        id: "house-signature",
        name: "House Signature",
        description: "The house blend: oud, amber, iris and vanilla in balance.",
        price: 23_000,
        category: Category::Signature,
        mood: Mood::Romantic,
        notes: &["iris", "oud", "amber", "vanilla"],
        story: "The first fragrance the house ever composed.",
        availability: Availability::InStock,
        featured: true,
    },
    ProductSeed {
        id: "atelier-no-7",
        name: "Atelier No. 7",
        description: "Fig leaf, suede and a whisper of incense.",
        price: 21_500,
        category: Category::Signature,
        mood: Mood::Fresh,
        notes: &["fig leaf", "suede", "incense", "musk"],
        story: "The seventh trial from the atelier, kept because nobody could forget it.",
        availability: Availability::InStock,
        featured: false,
    },
    ProductSeed {
        id: "heritage-blend",
        name: "Heritage Blend",
        description: "Sandalwood and rose attar in the old tradition.",
        price: 25_000,
        category: Category::Signature,
        mood: Mood::Mysterious,
        notes: &["rose attar", "sandalwood", "cardamom", "musk"],
        story: "Blended from a recipe passed down through three generations.",
        availability: Availability::Limited,
        featured: false,
    },
    ProductSeed {
        id: "discovery-coffret",
        name: "Discovery Coffret",
        description: "Five miniatures spanning every family in the house.",
        price: 9_500,
        category: Category::Signature,
        mood: Mood::Playful,
        notes: &["oud", "amber", "jasmine", "vanilla", "iris"],
        story: "For those still finding their scent.",
        availability: Availability::InStock,
        featured: false,
    },
];

pub(super) const COLLECTION_SEEDS: &[CollectionSeed] = &[
    CollectionSeed {
        id: "signature-collection",
        name: "The Signature Collection",
        description: "The house blends that define our style.",
        product_ids: &["house-signature", "atelier-no-7", "heritage-blend"],
    },
    CollectionSeed {
        id: "oud-reserve",
        name: "Oud Reserve",
        description: "Our deepest, rarest oud compositions.",
        product_ids: &["royal-oud", "midnight-agarwood", "oud-rose-nocturne", "smoked-cedar-oud"],
    },
    CollectionSeed {
        id: "limited-editions",
        name: "Limited Editions",
        description: "Small-batch releases available while stock lasts.",
        product_ids: &[
            "oud-rose-nocturne",
            "desert-dusk",
            "rose-petal-mist",
            "cocoa-spice",
            "heritage-blend",
        ],
    },
    CollectionSeed {
        id: "discovery-set",
        name: "Discovery Set",
        description: "One fragrance from every family, chosen to start your journey.",
        product_ids: &["discovery-coffret", "royal-oud", "amber-sultan", "jasmine-dawn", "vanilla-noir"],
    },
];
