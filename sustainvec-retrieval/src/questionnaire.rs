/// One disclosure question. `id` becomes the key of its context in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
}

/// The eleven TCFD recommended disclosures, phrased as retrieval queries.
pub const TCFD_QUESTIONS: [Question; 11] = [
    Question {
        id: "tcfd_01",
        text: "How does the company’s board oversee climate-related risks and opportunities?",
    },
    Question {
        id: "tcfd_02",
        text: "What is the role of management in assessing and managing climate-related risks and opportunities?",
    },
    Question {
        id: "tcfd_03",
        text: "What are the most relevant climate-related risks and opportunities that the organization has identified over the short, medium, and long term? Are risks clearly associated with a horizon?",
    },
    Question {
        id: "tcfd_04",
        text: "How do climate-related risks and opportunities impact the organization’s business strategy, economic and financial performance, and financial planning?",
    },
    Question {
        id: "tcfd_05",
        text: "How resilient is the organization’s strategy when considering different climate-related scenarios, including a 2°C target or lower scenario? How resilient is the organization’s strategy when considering climate physical risks?",
    },
    Question {
        id: "tcfd_06",
        text: "What processes does the organization use to identify and assess climate-related risks?",
    },
    Question {
        id: "tcfd_07",
        text: "How does the organization manage climate-related risks?",
    },
    Question {
        id: "tcfd_08",
        text: "How are the processes for identifying, assessing, and managing climate-related risks integrated into the organization’s overall risk management?",
    },
    Question {
        id: "tcfd_09",
        text: "What metrics does the organization use to assess climaterelated risks and opportunities? How do these metrics help ensure that performance aligns with its strategy and risk management process?",
    },
    Question {
        id: "tcfd_10",
        text: "Does the organization disclose its Scope 1, Scope 2, and, if appropriate, Scope 3 greenhouse gas (GHG) emissions? What are the related risks, and do they differ depending on the scope?",
    },
    Question {
        id: "tcfd_11",
        text: "What targets does the organization use to understand, quantify, and benchmark climate-related risks and opportunities? How is the organization performing against these targets?",
    },
];
