//! Presentation of built partners

use std::fmt::Write as _;

use clap::ValueEnum;
use partner_core::error::{PartnerError, Result};
use partner_core::model::IndividualPartner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One indented block per partner
    Text,
}

pub fn render(partners: &[IndividualPartner], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(partners)?),
        OutputFormat::Text => render_text(partners),
    }
}

fn render_text(partners: &[IndividualPartner]) -> Result<String> {
    let mut out = String::new();
    for partner in partners {
        write_partner(&mut out, partner).map_err(|e| PartnerError::other(e.to_string()))?;
    }
    Ok(out)
}

fn write_partner(out: &mut String, partner: &IndividualPartner) -> std::fmt::Result {
    writeln!(
        out,
        "#{} {} ({})",
        partner.customer_id(),
        partner.display_name(),
        partner.culture_name()
    )?;
    if !partner.email().is_empty() {
        writeln!(out, "  email: {}", partner.email())?;
    }

    writeln!(out, "  addresses: {}", partner.addresses().len())?;
    for address in partner.addresses() {
        writeln!(
            out,
            "    {}, {}, {} {} {}",
            address.address_line1,
            address.city,
            address.region_id,
            address.postal_code,
            address.country_id
        )?;
    }

    writeln!(out, "  phones: {}", partner.phone_numbers().len())?;
    for phone in partner.phone_numbers() {
        let marker = if partner.primary_phone_number_id() == Some(phone.phone_number_id) {
            " (primary)"
        } else {
            ""
        };
        writeln!(out, "    {}{}", phone.number, marker)?;
    }
    Ok(())
}
