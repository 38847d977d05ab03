// Prompt assembly for the code-generation backend
use crate::domain::vehicle::{TargetLanguage, VehicleDomain};

const USER_REQUEST_SEPARATOR: &str = "\n\nUser Request: ";

/// Build the exact text sent to the generation backend: the engineered
/// system-instruction block followed by the raw requirement text.
///
/// Pure function of its inputs; the requirement text is passed through
/// unmodified, empty or not. Enforcing non-emptiness is the caller's job.
pub fn build_prompt(
    domain: VehicleDomain,
    language: TargetLanguage,
    requirement_text: &str,
) -> String {
    let mut prompt = system_instruction(domain, language);
    prompt.push_str(USER_REQUEST_SEPARATOR);
    prompt.push_str(requirement_text);
    prompt
}

fn system_instruction(domain: VehicleDomain, language: TargetLanguage) -> String {
    format!(
        "You are an expert automotive software architect.\n\
         Your goal: generate high-performance, safe code for {domain} complying with \
         SDV (Software Defined Vehicle) standards.\n\
         \n\
         Strict requirements:\n\
         1. LANGUAGE: Use {language}.\n\
         2. ARCHITECTURE: Implement a Service-Oriented Architecture (SoA). Define clear \
         Service Interfaces (APIs).\n\
         3. SAFETY: Follow MISRA C++ (for C++) or ASPICE guidelines. Handle errors gracefully.\n\
         4. TESTING: Along with the main code, generate a specific 'Unit Test Case' block \
         to validate the logic.\n\
         5. DOCUMENTATION: Add comments explaining the 'Service Interface' and safety logic.",
        domain = domain.label(),
        language = language.label(),
    )
}

/// Pre-filled requirement text shown in the editable field. The user may
/// overwrite it entirely before submitting.
pub fn default_requirement_text(domain: VehicleDomain, language: TargetLanguage) -> String {
    format!(
        "Write a {language} class for a {domain}.\n\
         Requirements:\n\
         1. Implement a method to read sensor data.\n\
         2. Implement logic to detect critical thresholds.\n\
         3. Trigger a safety alert if thresholds are breached.\n\
         4. Ensure code follows automotive safety standards (MISRA/ISO 26262).\n\
         5. Add detailed comments.",
        language = language.label(),
        domain = domain.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_all_instruction_elements() {
        for domain in VehicleDomain::ALL {
            for language in TargetLanguage::ALL {
                let prompt = build_prompt(domain, language, "do the thing");

                // Role, language, interfaces, standard, tests, documentation
                assert!(prompt.contains("expert automotive software architect"));
                assert!(prompt.contains(language.label()));
                assert!(prompt.contains("Service Interfaces"));
                assert!(prompt.contains("MISRA"));
                assert!(prompt.contains("ASPICE"));
                assert!(prompt.contains("Unit Test Case"));
                assert!(prompt.contains("DOCUMENTATION"));
                assert!(prompt.contains(domain.label()));
            }
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt(VehicleDomain::Bms, TargetLanguage::Rust, "requirements here");
        let b = build_prompt(VehicleDomain::Bms, TargetLanguage::Rust, "requirements here");
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_ends_with_raw_requirement_text() {
        let prompt = build_prompt(
            VehicleDomain::Tpms,
            TargetLanguage::Kotlin,
            "1. Custom requirement",
        );
        assert!(prompt.ends_with("User Request: 1. Custom requirement"));
    }

    #[test]
    fn test_empty_requirement_is_passed_through() {
        let prompt = build_prompt(VehicleDomain::Bms, TargetLanguage::Python, "");
        assert!(prompt.ends_with("User Request: "));
    }

    #[test]
    fn test_default_requirement_text_mentions_selection() {
        let text = default_requirement_text(VehicleDomain::Tpms, TargetLanguage::CppMisra);
        assert!(text.contains("C++ (MISRA Standard)"));
        assert!(text.contains("Tyre Pressure Monitoring (TPMS)"));
        assert!(text.contains("5. Add detailed comments."));
    }
}
