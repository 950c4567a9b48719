// libs/prescription-cell/src/models.rs
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use serde::Deserialize;

use shared_models::error::AppError;

pub const VALIDATION_MESSAGE: &str = "Faltan campos obligatorios: email, nombrePaciente o receta";
pub const INVALID_BASE64_MESSAGE: &str = "El campo recetaPDFBase64 no contiene base64 válido.";
pub const SEND_ERROR_MESSAGE: &str = "No se pudo enviar la receta.";
pub const SENT_MESSAGE: &str = "Receta enviada exitosamente.";

/// Standard alphabet, padding optional.
const PDF_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrescriptionRequest {
    pub email: Option<String>,
    #[serde(rename = "nombrePaciente")]
    pub nombre_paciente: Option<String>,
    #[serde(rename = "recetaPDFBase64")]
    pub receta_pdf_base64: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prescription {
    pub email: String,
    pub patient_name: String,
    pub pdf: Vec<u8>,
}

impl PrescriptionRequest {
    pub fn validate(self) -> Result<Prescription, AppError> {
        let invalid = || AppError::ValidationError(VALIDATION_MESSAGE.to_string());

        let email = present(self.email).ok_or_else(invalid)?;
        let patient_name = present(self.nombre_paciente).ok_or_else(invalid)?;
        let encoded = present(self.receta_pdf_base64).ok_or_else(invalid)?;

        let pdf = decode_pdf(&encoded)
            .ok_or_else(|| AppError::ValidationError(INVALID_BASE64_MESSAGE.to_string()))?;

        Ok(Prescription {
            email,
            patient_name,
            pdf,
        })
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Decodes the PDF payload, tolerating a `data:...;base64,` prefix and
/// line breaks.
pub fn decode_pdf(encoded: &str) -> Option<Vec<u8>> {
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };

    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    PDF_ENGINE.decode(cleaned).ok().filter(|bytes| !bytes.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    // base64("%PDF-1.4 receta")
    const PDF_B64: &str = "JVBERi0xLjQgcmVjZXRh";

    #[test]
    fn test_decode_plain_and_data_url() {
        assert_eq!(decode_pdf(PDF_B64).unwrap(), b"%PDF-1.4 receta".to_vec());
        assert_eq!(
            decode_pdf(&format!("data:application/pdf;base64,{}", PDF_B64)).unwrap(),
            b"%PDF-1.4 receta".to_vec()
        );
        assert_eq!(
            decode_pdf("JVBERi0x\nLjQgcmVj\r\nZXRh").unwrap(),
            b"%PDF-1.4 receta".to_vec()
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_pdf("esto no es base64!").is_none());
    }

    #[test]
    fn test_validate_requires_every_field() {
        let complete = PrescriptionRequest {
            email: Some("ana@example.com".to_string()),
            nombre_paciente: Some("Ana Pérez".to_string()),
            receta_pdf_base64: Some(PDF_B64.to_string()),
        };

        let prescription = complete.clone().validate().unwrap();
        assert_eq!(prescription.patient_name, "Ana Pérez");
        assert_eq!(prescription.pdf, b"%PDF-1.4 receta".to_vec());

        let mut missing_name = complete.clone();
        missing_name.nombre_paciente = Some("   ".to_string());
        assert_matches!(missing_name.validate(), Err(AppError::ValidationError(msg)) if msg == VALIDATION_MESSAGE);

        let mut bad_pdf = complete;
        bad_pdf.receta_pdf_base64 = Some("%%%".to_string());
        assert_matches!(bad_pdf.validate(), Err(AppError::ValidationError(msg)) if msg == INVALID_BASE64_MESSAGE);
    }
}
