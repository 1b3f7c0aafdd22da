//! Company and employee records

use crate::error::{PayrollError, Result};
use covenant_core::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HireKind {
    Employee,
    Contractor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub wallet: Address,
    pub name: String,
    pub role: String,
    /// Token base units per second.
    pub salary: u128,
    pub currency: String,
    pub last_pay_date: u64,
    pub hired_at: u64,
    pub kind: HireKind,
}

impl Employee {
    /// Pay owed since the last pay date.
    pub fn accrued(&self, now: u64) -> Result<u128> {
        let elapsed = now.saturating_sub(self.last_pay_date);
        self.salary
            .checked_mul(elapsed as u128)
            .ok_or(PayrollError::AmountOverflow)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
    pub industry: String,
    pub metadata_uri: String,
    /// Informational role catalogue; membership is not enforced.
    pub roles: Vec<String>,
    pub owner: Address,
    pub founder_name: String,
    pub founder_role: String,
    /// Keyed by wallet; ordered so payroll runs are deterministic.
    pub employees: BTreeMap<Address, Employee>,
}

/// All registered companies. Ids are sequential from zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    companies: Vec<Company>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn company_count(&self) -> u64 {
        self.companies.len() as u64
    }

    pub fn company(&self, id: u64) -> Result<&Company> {
        self.companies
            .get(id as usize)
            .ok_or(PayrollError::CompanyNotFound(id))
    }

    pub fn employee(&self, company_id: u64, wallet: &Address) -> Result<&Employee> {
        self.company(company_id)?
            .employees
            .get(wallet)
            .ok_or_else(|| PayrollError::EmployeeNotFound {
                company: company_id,
                wallet: wallet.clone(),
            })
    }

    /// Register a company and auto-hire the founder into the founder
    /// role at zero salary. The creation fee is collected by the caller
    /// before this point.
    #[allow(clippy::too_many_arguments)]
    pub fn create_company(
        &mut self,
        owner: &Address,
        name: String,
        industry: String,
        metadata_uri: String,
        roles: Vec<String>,
        founder_name: String,
        founder_role: String,
        now: u64,
    ) -> u64 {
        let id = self.companies.len() as u64;
        let mut company = Company {
            id,
            name,
            industry,
            metadata_uri,
            roles,
            owner: owner.clone(),
            founder_name: founder_name.clone(),
            founder_role: founder_role.clone(),
            employees: BTreeMap::new(),
        };
        company.employees.insert(
            owner.clone(),
            Employee {
                wallet: owner.clone(),
                name: founder_name,
                role: founder_role,
                salary: 0,
                currency: String::new(),
                last_pay_date: now,
                hired_at: now,
                kind: HireKind::Employee,
            },
        );
        self.companies.push(company);
        id
    }

    #[allow(clippy::too_many_arguments)]
    pub fn hire_employee(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: Address,
        name: String,
        role: String,
        salary: u128,
        currency: String,
        now: u64,
    ) -> Result<()> {
        self.hire(
            caller,
            company_id,
            wallet,
            name,
            role,
            salary,
            currency,
            now,
            HireKind::Employee,
        )
    }

    pub fn hire_contractor(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: Address,
        name: String,
        rate: u128,
        currency: String,
        now: u64,
    ) -> Result<()> {
        self.hire(
            caller,
            company_id,
            wallet,
            name,
            "Contractor".to_string(),
            rate,
            currency,
            now,
            HireKind::Contractor,
        )
    }

    /// Per-employee pay owed at `now`, in ledger order.
    pub fn accrued(&self, company_id: u64, now: u64) -> Result<Vec<(Address, u128)>> {
        let company = self.company(company_id)?;
        let mut owed = Vec::with_capacity(company.employees.len());
        for employee in company.employees.values() {
            owed.push((employee.wallet.clone(), employee.accrued(now)?));
        }
        Ok(owed)
    }

    /// Reset every pay clock to `now`. Called once the caller has
    /// funded and performed the corresponding transfers.
    pub fn settle(&mut self, caller: &Address, company_id: u64, now: u64) -> Result<()> {
        let company = self.owned_company_mut(caller, company_id)?;
        for employee in company.employees.values_mut() {
            employee.last_pay_date = now;
        }
        Ok(())
    }

    pub fn set_company_role(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: &Address,
        role: String,
    ) -> Result<()> {
        let company = self.owned_company_mut(caller, company_id)?;
        let employee =
            company
                .employees
                .get_mut(wallet)
                .ok_or_else(|| PayrollError::EmployeeNotFound {
                    company: company_id,
                    wallet: wallet.clone(),
                })?;
        employee.role = role;
        Ok(())
    }

    pub fn add_company_role(&mut self, caller: &Address, company_id: u64, role: String) -> Result<()> {
        let company = self.owned_company_mut(caller, company_id)?;
        if !company.roles.contains(&role) {
            company.roles.push(role);
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn hire(
        &mut self,
        caller: &Address,
        company_id: u64,
        wallet: Address,
        name: String,
        role: String,
        salary: u128,
        currency: String,
        now: u64,
        kind: HireKind,
    ) -> Result<()> {
        let company = self.owned_company_mut(caller, company_id)?;

        // Overwriting a record with pay still owed would erase the debt
        if let Some(existing) = company.employees.get(&wallet) {
            let accrued = existing.accrued(now)?;
            if accrued > 0 {
                return Err(PayrollError::UnsettledPay { wallet, accrued });
            }
        }

        company.employees.insert(
            wallet.clone(),
            Employee {
                wallet,
                name,
                role,
                salary,
                currency,
                last_pay_date: now,
                hired_at: now,
                kind,
            },
        );
        Ok(())
    }

    fn company_mut(&mut self, id: u64) -> Result<&mut Company> {
        self.companies
            .get_mut(id as usize)
            .ok_or(PayrollError::CompanyNotFound(id))
    }

    fn owned_company_mut(&mut self, caller: &Address, id: u64) -> Result<&mut Company> {
        let company = self.company_mut(id)?;
        if &company.owner != caller {
            return Err(PayrollError::NotCompanyOwner {
                caller: caller.clone(),
                company: id,
            });
        }
        Ok(company)
    }
}
