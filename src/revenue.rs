multiversx_sc::imports!();

use crate::access;
use crate::errors::{ERR_DUPLICATE_PERIOD, ERR_INVALID_MONTH, ERR_PERIOD_NOT_FOUND};
use crate::types::{RevenuePeriod, RevenueRecord};

/// Monthly revenue disclosures keyed by `(year, month)`.
#[multiversx_sc::module]
pub trait RevenueModule: access::AccessModule {
    /// Records the revenue of one month. A period can only be recorded once
    /// unless the owner has enabled amendments, in which case the new record
    /// replaces the old one and a `revenueAmended` event is emitted.
    #[endpoint(recordMonthlyRevenue)]
    fn record_monthly_revenue(
        &self,
        year: u32,
        month: u8,
        amount: BigUint,
        description: ManagedBuffer,
    ) {
        self.require_compliance_manager();
        require!((1..=12).contains(&month), ERR_INVALID_MONTH);

        let record_mapper = self.revenue(year, month);
        let amending = !record_mapper.is_empty();
        if amending {
            require!(self.revenue_amendment_allowed().get(), ERR_DUPLICATE_PERIOD);
        }

        let record = RevenueRecord {
            year,
            month,
            amount,
            description,
            recorded_at: self.blockchain().get_block_timestamp(),
        };

        if amending {
            let previous = record_mapper.get();
            self.revenue_amended_event(year, month, &previous.amount, &record.amount);
        } else {
            self.revenue_periods().push(&RevenuePeriod { year, month });
            self.revenue_recorded_event(year, month, &record.amount);
        }
        record_mapper.set(&record);
    }

    #[endpoint(setRevenueAmendment)]
    fn set_revenue_amendment(&self, allowed: bool) {
        self.require_owner();
        self.revenue_amendment_allowed().set(allowed);
        self.revenue_amendment_policy_changed_event(allowed);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMonthlyRevenue)]
    fn get_monthly_revenue(&self, year: u32, month: u8) -> RevenueRecord<Self::Api> {
        let record_mapper = self.revenue(year, month);
        require!(!record_mapper.is_empty(), ERR_PERIOD_NOT_FOUND);
        record_mapper.get()
    }

    #[view(getRevenuePeriods)]
    fn get_revenue_periods(&self) -> MultiValueEncoded<RevenuePeriod> {
        let mut result = MultiValueEncoded::new();
        for period in self.revenue_periods().iter() {
            result.push(period);
        }
        result
    }

    /// Sum of every month recorded for `year`. Zero if none.
    #[view(getAnnualRevenue)]
    fn get_annual_revenue(&self, year: u32) -> BigUint {
        let mut total = BigUint::zero();
        for month in 1..=12u8 {
            let record_mapper = self.revenue(year, month);
            if !record_mapper.is_empty() {
                total += record_mapper.get().amount;
            }
        }
        total
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("revenueRecorded")]
    fn revenue_recorded_event(&self, #[indexed] year: u32, #[indexed] month: u8, amount: &BigUint);

    #[event("revenueAmended")]
    fn revenue_amended_event(
        &self,
        #[indexed] year: u32,
        #[indexed] month: u8,
        #[indexed] previous_amount: &BigUint,
        new_amount: &BigUint,
    );

    #[event("revenueAmendmentPolicyChanged")]
    fn revenue_amendment_policy_changed_event(&self, #[indexed] allowed: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("revenue")]
    fn revenue(&self, year: u32, month: u8) -> SingleValueMapper<RevenueRecord<Self::Api>>;

    /// Periods in the order they were first recorded.
    #[storage_mapper("revenuePeriods")]
    fn revenue_periods(&self) -> VecMapper<RevenuePeriod>;

    #[storage_mapper("revenueAmendmentAllowed")]
    fn revenue_amendment_allowed(&self) -> SingleValueMapper<bool>;
}
