use rolodex_core::domain::address::NewAddress;
use rolodex_core::domain::customer::CustomerFields;

use crate::connection::DbPool;
use crate::repositories::{
    AddressRepository, CustomerRepository, RepositoryError, SqlAddressRepository,
    SqlCustomerRepository,
};

struct DemoCustomer {
    first_name: &'static str,
    last_name: &'static str,
    phone_number: &'static str,
    email: &'static str,
    addresses: &'static [(&'static str, &'static str, &'static str)],
}

/// Demo dataset for local development. Covers a customer with several
/// addresses, a customer with one, and a customer with none.
const DEMO_CUSTOMERS: &[DemoCustomer] = &[
    DemoCustomer {
        first_name: "Asha",
        last_name: "Verma",
        phone_number: "+91-98200-00001",
        email: "asha.verma@example.com",
        addresses: &[
            ("14 Marine Drive", "Mumbai", "Maharashtra"),
            ("3 FC Road", "Pune", "Maharashtra"),
        ],
    },
    DemoCustomer {
        first_name: "Daniel",
        last_name: "Okafor",
        phone_number: "+1-512-555-0142",
        email: "daniel.okafor@example.com",
        addresses: &[("901 Congress Ave", "Austin", "Texas")],
    },
    DemoCustomer {
        first_name: "Mei",
        last_name: "Tanaka",
        phone_number: "+81-3-5555-0199",
        email: "mei.tanaka@example.com",
        addresses: &[],
    },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedResult {
    pub customers: usize,
    pub addresses: usize,
}

pub async fn seed_demo_data(pool: &DbPool) -> Result<SeedResult, RepositoryError> {
    let customers = SqlCustomerRepository::new(pool.clone());
    let addresses = SqlAddressRepository::new(pool.clone());
    let mut result = SeedResult::default();

    for demo in DEMO_CUSTOMERS {
        let customer_id = customers
            .create(&CustomerFields {
                first_name: Some(demo.first_name.into()),
                last_name: Some(demo.last_name.into()),
                phone_number: Some(demo.phone_number.into()),
                email: Some(demo.email.into()),
            })
            .await?;
        result.customers += 1;

        for (line, city, state) in demo.addresses {
            addresses
                .create(&NewAddress {
                    customer_id: Some(customer_id.into()),
                    address: Some((*line).into()),
                    city: Some((*city).into()),
                    state: Some((*state).into()),
                })
                .await?;
            result.addresses += 1;
        }
    }

    Ok(result)
}
