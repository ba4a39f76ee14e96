use super::aggregate::ServiceOffering;

static CATALOG: &[ServiceOffering] = &[
    ServiceOffering {
        slug: "pc-troubleshooting",
        title: "PC Troubleshooting",
        summary: "Diagnose and fix slow performance, crashes, blue screens, startup issues, and other common computer problems.",
        overview: "Our expert technicians can identify and resolve a wide range of PC issues, from annoying slowdowns to complete system failures. We'll get your computer running smoothly again with minimal downtime.",
        full_description: "Our comprehensive PC troubleshooting service addresses the full spectrum of computer issues to restore optimal performance and functionality.",
        details: &[
            "Initial diagnostic assessment to identify the root cause of performance issues, system crashes, blue screens, or startup problems.",
            "Hardware diagnostics to check for faulty components, overheating issues, or hardware conflicts.",
            "Software troubleshooting including operating system repairs, driver updates, and software conflict resolution.",
            "Virus and malware scanning and removal to clean infected systems.",
            "System optimization to improve speed and performance through cleanup of temporary files, startup programs management, and disk defragmentation.",
            "Memory management and virtual memory optimization to address resource-intensive applications.",
            "Recommendations for hardware upgrades if necessary to resolve performance bottlenecks.",
            "Step-by-step guidance on preventing similar issues in the future through proper maintenance practices.",
        ],
        icon: "monitor",
    },
    ServiceOffering {
        slug: "password-recovery",
        title: "Password Recovery",
        summary: "Regain access to your accounts with our secure password recovery and account access solutions.",
        overview: "Locked out of your accounts? Our password recovery service helps you regain access to your computer, email, or other important accounts safely and securely.",
        full_description: "Our password recovery service helps you regain access to locked accounts while maintaining proper security protocols and data protection measures.",
        details: &[
            "Account access recovery for Windows, macOS, and Linux operating systems using secure, industry-standard methods.",
            "Email and cloud service account recovery assistance through verified recovery processes.",
            "Password manager database recovery for users locked out of their password management solutions.",
            "Data preservation techniques to ensure no loss of personal files during recovery procedures.",
            "Two-factor authentication recovery support for accounts with additional security measures.",
            "Setup of new security credentials following recovery with guidance on creating strong, memorable passwords.",
            "Implementation of password management solutions to prevent future lockouts.",
            "All recovery methods follow strict ethical guidelines and require proof of ownership.",
        ],
        icon: "key",
    },
    ServiceOffering {
        slug: "network-setup",
        title: "Network Setup",
        summary: "Professional installation and configuration of home or small business networks and Wi-Fi systems.",
        overview: "We'll set up your entire network for optimal performance, including router configuration, network security, and Wi-Fi optimization to eliminate dead zones.",
        full_description: "Our comprehensive network setup service creates reliable, secure, and optimized wired and wireless networks for homes and small businesses.",
        details: &[
            "Complete assessment of your space to determine optimal router placement and network architecture.",
            "Professional installation and configuration of routers, switches, access points, and mesh systems.",
            "Wi-Fi optimization to eliminate dead zones and ensure consistent coverage throughout your property.",
            "Network security implementation including strong encryption, firewall configuration, and guest network setup.",
            "Device connection and configuration for computers, smartphones, smart home devices, printers, and other networked equipment.",
            "Network naming and password setup with secure credentials that are easy for authorized users to remember.",
            "Quality of Service (QoS) configuration to prioritize critical applications and manage bandwidth effectively.",
            "Documentation of network details and basic troubleshooting guidance for common issues.",
        ],
        icon: "wifi",
    },
    ServiceOffering {
        slug: "custom-pc",
        title: "Custom PC Builds",
        summary: "Custom-built computers designed for your specific needs, whether for gaming, work, or general use.",
        overview: "We build custom PCs tailored to your exact requirements and budget. From high-performance gaming rigs to reliable business workstations, we use quality components with comprehensive warranties.",
        full_description: "Our custom PC building service creates personalized computer systems optimized for your specific requirements, preferences, and budget constraints.",
        details: &[
            "Consultation to determine your exact needs, use cases, performance requirements, and budget considerations.",
            "Component selection tailored to your specific requirements, whether for gaming, content creation, office work, or general use.",
            "Premium assembly with careful cable management, proper cooling optimization, and thorough testing.",
            "Operating system installation and basic software setup according to your preferences.",
            "Performance optimization including BIOS configuration, driver installation, and system tuning.",
            "Complete documentation of system specifications and component warranties.",
            "Post-build support and troubleshooting to address any issues that might arise after delivery.",
            "Upgrade guidance for future component improvements to extend system lifespan.",
        ],
        icon: "hard-drive",
    },
    ServiceOffering {
        slug: "printer-setup",
        title: "Printer Setup",
        summary: "Installation, configuration and troubleshooting for all types of printers and printing issues.",
        overview: "We'll get your printer connected to all your devices, configure wireless printing, install necessary drivers, and ensure everything is working perfectly.",
        full_description: "Our printer setup service ensures your printing devices are properly installed, configured, and optimized for reliable performance across all your devices.",
        details: &[
            "Physical setup and connection of printers via USB, network cable, or wireless configuration.",
            "Driver installation and updates for optimal compatibility with your devices and operating systems.",
            "Network printer configuration to enable printing from multiple computers and mobile devices.",
            "Wireless printing setup for convenient printing from anywhere in your home or office.",
            "Print queue management and default settings configuration according to your preferences.",
            "Paper handling setup including tray configuration and paper size settings.",
            "Scanner and multifunction device setup for scanning to email, folders, or the cloud.",
            "Basic troubleshooting training for common printing issues and maintenance procedures.",
        ],
        icon: "printer",
    },
    ServiceOffering {
        slug: "data-recovery",
        title: "Data Recovery",
        summary: "Recover lost or deleted files from computers, external drives, and other storage devices.",
        overview: "Our data recovery experts can help retrieve lost documents, photos, and other important files from damaged or corrupted storage devices.",
        full_description: "Our data recovery service uses specialized techniques and tools to retrieve lost, deleted, or inaccessible data from various storage devices.",
        details: &[
            "Initial assessment to determine the cause and extent of data loss (accidental deletion, drive failure, corruption, etc.).",
            "Non-destructive recovery attempts using specialized software tools to preserve original data integrity.",
            "Recovery from various storage media including hard drives, SSDs, USB drives, memory cards, and RAID arrays.",
            "File system repair for corrupted partitions that prevent normal access to your data.",
            "Specialized recovery for specific file types such as documents, photos, videos, and emails.",
            "Clean room procedures for physical drive damage cases requiring hardware intervention.",
            "Secure data handling practices with strict confidentiality protocols.",
            "Preventative advice and backup strategy recommendations to prevent future data loss scenarios.",
        ],
        icon: "database",
    },
    ServiceOffering {
        slug: "software-installation",
        title: "Software Installation",
        summary: "Professional installation and configuration of software applications for your specific needs.",
        overview: "We'll install and configure your software programs, ensuring they're properly set up and optimized for your system.",
        full_description: "Our software installation service ensures applications are properly installed, configured, and optimized for your specific system and use case.",
        details: &[
            "Clean installation of operating systems (Windows, macOS, Linux) with all necessary updates and drivers.",
            "Application software installation with proper configuration based on your requirements.",
            "Professional software suite setup for productivity, creative work, accounting, or specialized business needs.",
            "License management and registration to ensure proper software activation and compliance.",
            "Data migration from previous installations to new software versions when upgrading.",
            "Cross-platform compatibility configuration for environments using multiple operating systems.",
            "Custom settings optimization for improved workflow efficiency and user experience.",
            "Basic training on software features to help you maximize the value of your applications.",
        ],
        icon: "cog",
    },
    ServiceOffering {
        slug: "virus-removal",
        title: "Virus Removal",
        summary: "Comprehensive malware and virus detection and removal to protect your system and data.",
        overview: "Our thorough virus removal process eliminates malware, spyware, and other threats while implementing better protection for the future.",
        full_description: "Our virus removal service thoroughly eliminates malware infections while implementing protective measures to prevent future security compromises.",
        details: &[
            "Comprehensive system scanning using multiple professional-grade malware detection tools.",
            "Removal of viruses, trojans, ransomware, spyware, adware, and other malicious software.",
            "Boot-level cleanup for persistent malware that activates before the operating system loads.",
            "Browser cleanup including removal of unwanted extensions, hijacked settings, and cached malware.",
            "System repair of damaged or modified system files compromised by malware.",
            "Security software installation and configuration to prevent future infections.",
            "Implementation of best practices for ongoing protection and safe computing habits.",
            "Follow-up scanning and verification to ensure complete removal of all malicious code.",
        ],
        icon: "shield-check",
    },
    ServiceOffering {
        slug: "hardware-repair",
        title: "Hardware Repair",
        summary: "Diagnosis and repair of hardware issues including component replacement and upgrades.",
        overview: "From screen replacements to motherboard repairs, we can fix or replace damaged components to get your device working again.",
        full_description: "Our hardware repair service addresses physical component failures and damage to restore functionality to your devices.",
        details: &[
            "Diagnostic assessment to identify specific hardware components causing system failures or performance issues.",
            "Repair and replacement of internal components including motherboards, processors, memory, and storage devices.",
            "Display repair for monitors and laptop screens with brightness, color, or physical damage issues.",
            "Keyboard and input device replacement for computers with non-responsive or damaged keys.",
            "Power system repairs including replacement of power supplies, batteries, and charging components.",
            "Cooling system improvements to address overheating issues that can cause performance problems.",
            "Port and connector repairs for damaged USB, HDMI, audio, or power connections.",
            "Preventative maintenance to extend hardware lifespan and prevent future failures.",
        ],
        icon: "wrench",
    },
    ServiceOffering {
        slug: "tech-support",
        title: "Remote Support",
        summary: "Get help with technical issues from the comfort of your home via secure remote assistance.",
        overview: "Many issues can be resolved without an in-person visit. Our secure remote support allows us to troubleshoot and fix problems while you watch.",
        full_description: "Our remote support service offers convenient technical assistance without requiring an in-person visit, saving you time while solving your technology problems.",
        details: &[
            "Secure remote connection to your computer allowing our technicians to directly resolve issues while you watch.",
            "Real-time troubleshooting of software problems, error messages, and configuration issues.",
            "Guided support with clear communication throughout the process so you understand what's being done.",
            "Software updates and patch installation to address security vulnerabilities and fix bugs.",
            "System optimization to improve performance and responsiveness through various tuning techniques.",
            "Quick resolution of many common issues that don't require physical hardware intervention.",
            "Flexible scheduling options including evening and weekend availability for your convenience.",
            "Follow-up support to ensure the solutions implemented remain effective over time.",
        ],
        icon: "life-buoy",
    },
    ServiceOffering {
        slug: "system-upgrades",
        title: "System Upgrades",
        summary: "Boost your computer's performance with hardware upgrades that extend its useful life.",
        overview: "Improve your existing computer's speed and capabilities with targeted upgrades to RAM, storage, graphics cards, and other components.",
        full_description: "Our system upgrade service enhances your existing computer's capabilities through strategic component improvements that maximize performance gain for your investment.",
        details: &[
            "System assessment to identify performance bottlenecks and recommend the most cost-effective upgrades.",
            "Memory (RAM) upgrades to improve multitasking capability and overall system responsiveness.",
            "Storage upgrades including SSD installation to dramatically improve boot and load times.",
            "Graphics card upgrades for improved gaming performance or multi-monitor productivity setups.",
            "Processor upgrades when supported by your system architecture.",
            "Cooling system improvements to maintain stable performance during intensive tasks.",
            "Power supply upgrades to support additional components and ensure system stability.",
            "Performance testing before and after upgrades to demonstrate tangible improvements.",
        ],
        icon: "cpu",
    },
    ServiceOffering {
        slug: "response-times",
        title: "Quick Response",
        summary: "Fast service with most issues resolved within 24-48 hours of your initial inquiry submission.",
        overview: "We understand that technical problems can be urgent. That's why we prioritize quick response times and efficient problem-solving.",
        full_description: "Our quick response service ensures your technical issues are addressed promptly to minimize downtime and disruption to your work or personal activities.",
        details: &[
            "Rapid initial response to inquiries typically within 2-4 business hours.",
            "Expedited appointment scheduling for urgent technical issues affecting productivity.",
            "Same-day service availability for critical problems when scheduled early in the day.",
            "Remote support options for immediate assistance with software-related issues.",
            "Transparent communication about expected resolution timeframes based on issue complexity.",
            "Priority scheduling system for existing customers with ongoing support arrangements.",
            "After-hours emergency support for business clients with mission-critical systems.",
            "Regular status updates for more complex issues requiring extended resolution time.",
        ],
        icon: "clock",
    },
];

/// Home page order.
const FEATURED: [&str; 6] = [
    "pc-troubleshooting",
    "password-recovery",
    "network-setup",
    "custom-pc",
    "printer-setup",
    "response-times",
];

pub fn catalog() -> &'static [ServiceOffering] {
    CATALOG
}

pub fn find(slug: &str) -> Option<&'static ServiceOffering> {
    CATALOG.iter().find(|offering| offering.slug == slug)
}

pub fn featured() -> Vec<&'static ServiceOffering> {
    FEATURED.iter().filter_map(|slug| find(slug)).collect()
}

/// Options of the inquiry form's service selector.
pub fn service_titles() -> Vec<&'static str> {
    CATALOG.iter().map(|offering| offering.title).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_slugs_are_unique() {
        let slugs: HashSet<_> = catalog().iter().map(|o| o.slug).collect();
        assert_eq!(slugs.len(), 12);
        assert_eq!(catalog().len(), 12);
    }

    #[test]
    fn test_featured_keeps_home_page_order() {
        let titles: Vec<_> = featured().iter().map(|o| o.title).collect();
        assert_eq!(
            titles,
            vec![
                "PC Troubleshooting",
                "Password Recovery",
                "Network Setup",
                "Custom PC Builds",
                "Printer Setup",
                "Quick Response",
            ]
        );
    }

    #[test]
    fn test_find_and_anchor() {
        let offering = find("tech-support").unwrap();
        assert_eq!(offering.title, "Remote Support");
        assert_eq!(offering.anchor_href(), "/services#tech-support");
        assert!(find("gardening").is_none());
    }

    #[test]
    fn test_every_offering_has_details() {
        for offering in catalog() {
            assert_eq!(offering.details.len(), 8, "{}", offering.slug);
            assert!(!offering.icon.is_empty());
        }
    }
}
