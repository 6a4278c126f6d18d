use serde::Deserialize;

const DEFAULT_CURRENCY_SYMBOL: &str = "€";

/// Half-width, in degrees, of the map window drawn around a yacht's berth.
const MAP_SPAN_DEG: f64 = 0.02;

/// Onboard feature advertised on a yacht's listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Amenity {
    Wc,
    Wifi,
    Kitchen,
    Sound,
    Captain,
    Discount,
    Other(String),
}

impl From<String> for Amenity {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "wc" => Self::Wc,
            "wifi" => Self::Wifi,
            "kitchen" => Self::Kitchen,
            "sound" => Self::Sound,
            "captain" => Self::Captain,
            "discount" => Self::Discount,
            _ => Self::Other(tag),
        }
    }
}

impl Amenity {
    /// Returns human-readable label; unknown tags are shown as-is
    pub fn label(&self) -> &str {
        match self {
            Self::Wc => "WC",
            Self::Wifi => "Wi-Fi",
            Self::Kitchen => "Kitchen",
            Self::Sound => "Sound system",
            Self::Captain => "Captain",
            Self::Discount => "Discount",
            Self::Other(tag) => tag,
        }
    }
}

/// Technical particulars; every field is optional in the catalog
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct YachtSpecs {
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub width: Option<String>,
    #[serde(default)]
    pub cabins: Option<u32>,
    #[serde(default)]
    pub wc: Option<u32>,
    #[serde(default)]
    pub crew: Option<u32>,
    #[serde(default)]
    pub build_year: Option<u32>,
    #[serde(default)]
    pub speed: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    /// OpenStreetMap embed URL centred on the coordinates, with a marker.
    pub fn map_embed_url(&self) -> String {
        format!(
            "https://www.openstreetmap.org/export/embed.html?bbox={:.4}%2C{:.4}%2C{:.4}%2C{:.4}&layer=mapnik&marker={}%2C{}",
            self.lng - MAP_SPAN_DEG,
            self.lat - MAP_SPAN_DEG,
            self.lng + MAP_SPAN_DEG,
            self.lat + MAP_SPAN_DEG,
            self.lat,
            self.lng
        )
    }
}

/// A yacht as listed in the catalog. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Yacht {
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub marina: Option<String>,

    /// Unit price, per day or per hour depending on the rental mode
    pub price: u32,

    #[serde(default)]
    pub currency: Option<String>,

    /// Maximum number of guests on board
    pub capacity: u32,

    #[serde(default)]
    pub specs: Option<YachtSpecs>,
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    #[serde(default)]
    pub coords: Option<Coords>,

    /// Cover image
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Yacht {
    pub fn currency_symbol(&self) -> &str {
        self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY_SYMBOL)
    }

    /// Marina if known, otherwise the general location
    pub fn place(&self) -> &str {
        self.marina.as_deref().unwrap_or(&self.location)
    }

    pub fn image_at(&self, index: usize) -> &str {
        self.images.get(index).map_or(self.image.as_str(), String::as_str)
    }

    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }

    /// Label/value pairs for the General and Technical tabs, in display order.
    /// Specs absent from the catalog entry are skipped.
    pub fn spec_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();

        if let Some(specs) = &self.specs {
            if let Some(length) = &specs.length {
                rows.push(("Length", length.clone()));
            }
            if let Some(width) = &specs.width {
                rows.push(("Width", width.clone()));
            }
            if let Some(cabins) = specs.cabins {
                rows.push(("Cabins", cabins.to_string()));
            }
            if let Some(wc) = specs.wc {
                rows.push(("WC", wc.to_string()));
            }
            if let Some(crew) = specs.crew {
                rows.push(("Crew", crew.to_string()));
            }
            if let Some(speed) = &specs.speed {
                rows.push(("Speed", speed.clone()));
            }
            if let Some(year) = specs.build_year {
                rows.push(("Build year", year.to_string()));
            }
        }

        rows.push(("Capacity", format!("{} guests", self.capacity)));
        if let Some(marina) = &self.marina {
            rows.push(("Marina", marina.clone()));
        }
        rows.push(("Region", self.location.clone()));

        rows
    }
}
