use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostComponent {
    pub name: String,
    pub value: f64,
}

/// Per-order cost components. `total_cost` is derived once, when the row is built.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    order_id: String,
    components: Vec<CostComponent>,
    total_cost: f64,
}

impl CostBreakdown {
    pub fn new(order_id: String, components: Vec<CostComponent>) -> Self {
        let total_cost = components.iter().map(|component| component.value).sum();
        Self {
            order_id,
            components,
            total_cost,
        }
    }

    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    pub fn components(&self) -> &[CostComponent] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<f64> {
        self.components
            .iter()
            .find(|component| component.name == name)
            .map(|component| component.value)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct CostBreakdownTable {
    component_names: Vec<String>,
    rows: Vec<CostBreakdown>,
}

impl CostBreakdownTable {
    pub fn new(component_names: Vec<String>, rows: Vec<CostBreakdown>) -> Self {
        Self {
            component_names,
            rows,
        }
    }

    pub fn component_names(&self) -> &[String] {
        &self.component_names
    }

    pub fn rows(&self) -> &[CostBreakdown] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn for_order(&self, order_id: &str) -> Option<&CostBreakdown> {
        self.rows.iter().find(|row| row.order_id == order_id)
    }

    pub fn totals(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.total_cost)
    }
}
