pub struct LegalSection {
    pub id: &'static str,
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

pub struct LegalDocument {
    pub title: &'static str,
    pub updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub static TERMS: LegalDocument = LegalDocument {
    title: "Terms of Service",
    updated: "January 15, 2025",
    sections: &[
        LegalSection {
            id: "acceptance",
            heading: "Acceptance of terms",
            paragraphs: &[
                "By creating an account or placing an order on Velomart you agree to these terms. If you do not agree, do not use the marketplace.",
            ],
        },
        LegalSection {
            id: "marketplace",
            heading: "The marketplace",
            paragraphs: &[
                "Velomart connects independent bicycle sellers with customers. Each listing is offered by the seller named on it, and the contract of sale is between you and that seller.",
                "We collect payment on behalf of sellers, retain the published marketplace commission, and pay out the balance on the regular payout schedule.",
            ],
        },
        LegalSection {
            id: "accounts",
            heading: "Accounts",
            paragraphs: &[
                "You are responsible for keeping your credentials confidential and for all activity under your account. Accounts created through Google or Strava sign-in are subject to the same terms.",
            ],
        },
        LegalSection {
            id: "sellers",
            heading: "Seller obligations",
            paragraphs: &[
                "Sellers must describe items accurately, ship within the stated handling time, and keep valid payout details on file. Payouts may be withheld while an order is disputed.",
            ],
        },
        LegalSection {
            id: "liability",
            heading: "Limitation of liability",
            paragraphs: &[
                "To the extent permitted by law, Velomart is not liable for indirect or consequential losses arising from use of the marketplace or from products sold by sellers.",
            ],
        },
    ],
};

pub static PRIVACY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    updated: "January 15, 2025",
    sections: &[
        LegalSection {
            id: "collection",
            heading: "Information we collect",
            paragraphs: &[
                "Account details you provide (name, email, phone, shipping address), order history, and payout details for sellers.",
                "If you sign in with Google or Strava we receive your basic profile and email address. We never receive your password for those services.",
            ],
        },
        LegalSection {
            id: "use",
            heading: "How we use it",
            paragraphs: &[
                "To process orders and payouts, to keep your account secure, and to send service messages such as password reset links.",
            ],
        },
        LegalSection {
            id: "sharing",
            heading: "Sharing",
            paragraphs: &[
                "Sellers receive the information needed to fulfil your order. Payment and shipping providers receive what they need to complete their part. We do not sell personal data.",
            ],
        },
        LegalSection {
            id: "storage",
            heading: "Storage in your browser",
            paragraphs: &[
                "We keep a sign-in token in your browser's local storage so you stay signed in. Signing out removes it.",
            ],
        },
        LegalSection {
            id: "rights",
            heading: "Your rights",
            paragraphs: &[
                "You can update your profile at any time and may request export or deletion of your data by contacting support.",
            ],
        },
    ],
};

pub static REFUND_POLICY: LegalDocument = LegalDocument {
    title: "Refund Policy",
    updated: "January 15, 2025",
    sections: &[
        LegalSection {
            id: "window",
            heading: "Return window",
            paragraphs: &[
                "Items can be returned within 30 days of delivery. Requests after the window has closed cannot be accepted.",
            ],
        },
        LegalSection {
            id: "condition",
            heading: "Condition and restocking fees",
            paragraphs: &[
                "Unopened items in original packaging are refunded in full.",
                "Opened but unused items carry a 10% restocking fee. Used items in good condition carry a 25% restocking fee.",
                "Items damaged after delivery are not eligible for a refund.",
            ],
        },
        LegalSection {
            id: "process",
            heading: "How refunds are paid",
            paragraphs: &[
                "Once the seller confirms receipt, the refund is issued to the original payment method, normally within 5 to 10 business days.",
            ],
        },
    ],
};
