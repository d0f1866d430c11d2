//! Static reference lists offered by the registration forms.

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const COLOMBIAN_CITIES: [&str; 15] = [
    "Bogotá",
    "Medellín",
    "Cali",
    "Barranquilla",
    "Cartagena",
    "Cúcuta",
    "Bucaramanga",
    "Pereira",
    "Ibagué",
    "Santa Marta",
    "Villavicencio",
    "Manizales",
    "Neiva",
    "Pasto",
    "Armenia",
];

pub const COLOMBIAN_DEPARTMENTS: [&str; 32] = [
    "Amazonas",
    "Antioquia",
    "Arauca",
    "Atlántico",
    "Bolívar",
    "Boyacá",
    "Caldas",
    "Caquetá",
    "Casanare",
    "Cauca",
    "Cesar",
    "Chocó",
    "Córdoba",
    "Cundinamarca",
    "Guainía",
    "Guaviare",
    "Huila",
    "La Guajira",
    "Magdalena",
    "Meta",
    "Nariño",
    "Norte de Santander",
    "Putumayo",
    "Quindío",
    "Risaralda",
    "San Andrés y Providencia",
    "Santander",
    "Sucre",
    "Tolima",
    "Valle del Cauca",
    "Vaupés",
    "Vichada",
];

pub const DENTAL_PROFESSIONS: [&str; 10] = [
    "Odontólogo General",
    "Ortodoncista",
    "Endodoncista",
    "Periodoncista",
    "Cirujano Oral y Maxilofacial",
    "Odontopediatra",
    "Prostodoncista",
    "Patólogo Oral",
    "Radiología Oral",
    "Implantólogo",
];

/// A sales office that registrants can be assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOffice {
    pub id: String,
    pub name: String,
    pub city: String,
    pub capacity: u32,
    pub assigned_users: u32,
    pub specialties: Vec<String>,
}

impl SalesOffice {
    pub fn has_capacity(&self) -> bool {
        self.assigned_users < self.capacity
    }
}

/// Generate a user id: `USR_`, the current time in base 36, then a random suffix.
pub fn generate_user_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(10)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!("USR_{}{}", to_base36(millis), suffix)
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
