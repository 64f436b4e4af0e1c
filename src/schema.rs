//! The PostalMate schema dictionary.
//!
//! A fixed, read-only table of the tables worth migrating. Tokens are the
//! uppercase relation names PostalMate uses internally; `priority` orders
//! migration so that referenced rows (customers) land before the rows
//! referencing them (shipments, invoices).

/// One known PostalMate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    /// Relation name as it appears in the backup stream.
    pub token: &'static str,
    /// Human-readable label shown in the migration UI.
    pub label: &'static str,
    /// Lower is migrated first.
    pub priority: u32,
    pub columns: &'static [&'static str],
    /// Row count observed in the reference backup the size fallback is calibrated on.
    pub reference_count: u64,
}

/// Priority assigned to names missing from the dictionary.
pub const UNKNOWN_PRIORITY: u32 = 99;

pub static TABLES: [TableSpec; 12] = [
    TableSpec {
        token: "CUSTOMER",
        label: "Customers",
        priority: 1,
        columns: &[
            "CUSTOMERID",
            "FIRSTNAME",
            "LASTNAME",
            "COMPANYNAME",
            "VOICEPHONENO",
            "EMAIL",
            "ADDDATE",
            "DELETED",
            "FAXPHONENO",
            "SOURCE",
            "USERDEF1",
        ],
        reference_count: 90140,
    },
    TableSpec {
        token: "SHIPTO",
        label: "Ship-To Addresses",
        priority: 2,
        columns: &[
            "SHIPTOID",
            "FIRSTNAME",
            "LASTNAME",
            "COMPANYNAME",
            "CONTACT",
            "ADDRESS1",
            "ADDRESS2",
            "ADDRESS3",
            "ZIPCODE",
            "ZIPPLUS",
            "COUNTRYNAME",
            "EMAIL",
            "VOICEPHONENO",
            "ISCOMMERCIAL",
            "DELETED",
        ],
        reference_count: 358534,
    },
    TableSpec {
        token: "SHIPMENTXN",
        label: "Shipments",
        priority: 3,
        columns: &[
            "SHIPMENTXNID",
            "CUSTOMERREF",
            "CARRIERREF",
            "CARRIERNAME",
            "SHIPTOFIRSTNAME",
            "SHIPTOLASTNAME",
            "SHIPTOCOMPANYNAME",
            "SHIPTOADDRESS1",
            "ACTUALWEIGHT",
            "TRANSACTIONDTG",
            "VOIDED",
            "TRACKINGNUMBER",
            "DIMENSIONS",
            "SERVICE",
        ],
        reference_count: 739928,
    },
    TableSpec {
        token: "PACKAGEXN",
        label: "Packages",
        priority: 4,
        columns: &[
            "PKGRECVXNID",
            "CARRIERREF",
            "CARRIERNAME",
            "TRACKINGNUMBER",
            "DTG",
            "DTGCOMPLETE",
            "STATUS",
            "PKGTYPE",
            "CUSTOMERREF",
            "SENDER",
            "NOTES",
        ],
        reference_count: 747103,
    },
    TableSpec {
        token: "PKGRECVXN",
        label: "Package Check-ins",
        priority: 4,
        columns: &[
            "PKGRECVXNID",
            "CARRIERREF",
            "CARRIERNAME",
            "TRACKINGNUMBER",
            "DTG",
            "DTGCOMPLETE",
            "STATUS",
            "PKGTYPE",
            "CUSTOMERREF",
            "SENDER",
            "NOTES",
        ],
        reference_count: 4472,
    },
    TableSpec {
        token: "PRODUCTTBL",
        label: "Products",
        priority: 5,
        columns: &[
            "PRODUCTID",
            "PRODUCTNAME",
            "PRODUCTDESC",
            "UNITPRICE",
            "UNITMEASURE",
            "TAXABLE",
            "DISCONTINUED",
        ],
        reference_count: 5470,
    },
    TableSpec {
        token: "INVOICETBL",
        label: "Invoices",
        priority: 6,
        columns: &[
            "INVOICEID",
            "CUSTOMERREF",
            "INVOICEDATE",
            "DUEDATE",
            "INVOICETOTAL",
            "BALANCEDUE",
            "STATUS",
        ],
        reference_count: 734545,
    },
    TableSpec {
        token: "MBDETAIL",
        label: "Mailboxes",
        priority: 7,
        columns: &[
            "MBDETAILID",
            "MAILBOXNUMBER",
            "CUSTOMERREF",
            "STATUS",
            "OPENDATE",
            "NEXTDUEDATE",
            "PERMONTHRATE",
            "MONTHTERM",
        ],
        reference_count: 1606,
    },
    TableSpec {
        token: "CARRIER",
        label: "Carriers",
        priority: 8,
        columns: &["CARRIERID", "CARRIERNAME", "STATUS", "ACCOUNT"],
        reference_count: 52,
    },
    TableSpec {
        token: "DEPARTMENT",
        label: "Departments",
        priority: 9,
        columns: &["DEPARTMENTID", "DEPARTMENTNAME"],
        reference_count: 88,
    },
    TableSpec {
        token: "PAYMENTTBL",
        label: "Payments",
        priority: 10,
        columns: &[
            "PAYMENTID",
            "INVOICEREF",
            "PAYMENTDATE",
            "AMOUNT",
            "PAYMENTMETHOD",
            "REFERENCE",
        ],
        reference_count: 735412,
    },
    TableSpec {
        token: "INVOICEITEM",
        label: "Invoice Line Items",
        priority: 11,
        columns: &[
            "INVOICEITEMID",
            "INVOICEREF",
            "PRODUCTREF",
            "QUANTITY",
            "UNITPRICE",
            "LINETOTAL",
        ],
        reference_count: 1516804,
    },
];

/// Look up a table by its relation name.
pub fn lookup(token: &str) -> Option<&'static TableSpec> {
    return TABLES.iter().find(|t| t.token == token);
}

/// Migration priority of `token`, or [`UNKNOWN_PRIORITY`] if it isn't known.
pub fn priority(token: &str) -> u32 {
    return lookup(token).map_or(UNKNOWN_PRIORITY, |t| t.priority);
}

/// Known columns of `token`; empty for unknown tables.
pub fn columns(token: &str) -> &'static [&'static str] {
    return lookup(token).map_or(&[], |t| t.columns);
}
