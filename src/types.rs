use serde::Serialize;
use std::fmt;

//==============================================================================
// Bank Account
//==============================================================================

/// Bank account embedded in every roster record. All three fields are
/// mandatory; the extractor refuses to build a partial account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankAccount {
    iban: String,
    bic: String,
    account_holder: String,
}

impl BankAccount {
    pub fn new(iban: String, bic: String, account_holder: String) -> Self {
        Self {
            iban,
            bic,
            account_holder,
        }
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }

    pub fn bic(&self) -> &str {
        &self.bic
    }

    pub fn account_holder(&self) -> &str {
        &self.account_holder
    }
}

//==============================================================================
// Company Type
//==============================================================================

/// Closed set of legal company forms, matched by canonical label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CompanyType {
    #[serde(rename = "SARS")]
    Sars,
    #[serde(rename = "SRL")]
    Srl,
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "SNC")]
    Snc,
    #[serde(rename = "SCS")]
    Scs,
    #[serde(rename = "SCA")]
    Sca,
}

impl CompanyType {
    pub const ALL: [CompanyType; 6] = [
        CompanyType::Sars,
        CompanyType::Srl,
        CompanyType::Sa,
        CompanyType::Snc,
        CompanyType::Scs,
        CompanyType::Sca,
    ];

    /// Canonical label as it appears in the sheet
    pub fn label(self) -> &'static str {
        match self {
            CompanyType::Sars => "SARS",
            CompanyType::Srl => "SRL",
            CompanyType::Sa => "SA",
            CompanyType::Snc => "SNC",
            CompanyType::Scs => "SCS",
            CompanyType::Sca => "SCA",
        }
    }

    /// Exact, case-sensitive label lookup. No trimming is applied.
    pub fn from_label(label: &str) -> Option<CompanyType> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//==============================================================================
// Employee Records
//==============================================================================

/// A person on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    first_name: String,
    last_name: String,
    has_children: bool,
    age: i64,
}

impl Individual {
    pub fn new(first_name: String, last_name: String, has_children: bool, age: i64) -> Self {
        Self {
            first_name,
            last_name,
            has_children,
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_children(&self) -> bool {
        self.has_children
    }

    pub fn age(&self) -> i64 {
        self.age
    }
}

/// A contracted company on the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Company {
    name: String,
    #[serde(rename = "type")]
    company_type: CompanyType,
}

impl Company {
    pub fn new(name: String, company_type: CompanyType) -> Self {
        Self { name, company_type }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn company_type(&self) -> CompanyType {
        self.company_type
    }
}

/// Which of the two record shapes a row was classified as
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EmployeeKind {
    Individual(Individual),
    Company(Company),
}

impl EmployeeKind {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Individual(_) => "individual",
            EmployeeKind::Company(_) => "company",
        }
    }
}

/// One roster record: the shared base fields plus exactly one variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: i64,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    bank_account: BankAccount,
    #[serde(flatten)]
    kind: EmployeeKind,
}

impl Employee {
    pub fn new(
        id: i64,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        bank_account: BankAccount,
        kind: EmployeeKind,
    ) -> Self {
        Self {
            id,
            email,
            phone,
            address,
            bank_account,
            kind,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn bank_account(&self) -> &BankAccount {
        &self.bank_account
    }

    pub fn kind(&self) -> &EmployeeKind {
        &self.kind
    }

    pub fn as_individual(&self) -> Option<&Individual> {
        match &self.kind {
            EmployeeKind::Individual(individual) => Some(individual),
            EmployeeKind::Company(_) => None,
        }
    }

    pub fn as_company(&self) -> Option<&Company> {
        match &self.kind {
            EmployeeKind::Company(company) => Some(company),
            EmployeeKind::Individual(_) => None,
        }
    }
}
