//! Prompt template for craft video scripts

use super::input::CraftIdea;

const PLACEHOLDER: &str = "{craft_type}";

/// Fixed template; `{craft_type}` is replaced by exactly one craft idea
pub const PROMPT_TEMPLATE: &str = r#"Generate a creative and engaging social media video script for a craft project. The craft type/theme is: "{craft_type}".

The script should be formatted for easy readability using Markdown. Use bold for key section titles and step names.

Include the following sections:
---
### **Video Title Suggestion:**
* [Suggest a catchy video title]

### **1. Catchy Hook & Intro (5-10 seconds)**
* **Visual:** [Describe visual for hook]
* **VO/Text Overlay:** "Your catchy opening line!"

### **2. Materials Needed (5-10 seconds)**
* **Visual:** [Quick cuts showing each material]
* **VO/Text Overlay:** "Here's what you'll need:"
* [List materials clearly with bullet points]

### **3. Step-by-Step Instructions & Filming Tips (15-70 seconds)**
* **(Aim for quick transitions and visually appealing close-ups for each step.)**

* **Step 1: [Step Name] (Time estimate)**
    * **Visual:** [Describe visual]
    * **VO/Text Overlay:** "What to say/show"
    * **Filming Tip:** [Specific camera/editing tip]

* **Step 2: [Step Name] (Time estimate)**
    * **Visual:** [Describe visual]
    * **VO/Text Overlay:** "What to say/show"
    * **Filming Tip:** [Specific camera/editing tip]

    (Continue for all necessary steps, ensuring each step starts with **Step X: [Step Name]**)

### **4. Call to Action (5-10 seconds)**
* **Visual:** [Show finished product, smiling crafter]
* **VO/Text Overlay:** "Encourage viewers to try it!"

### **5. Suggested Background Music Vibe**
* [Describe music style]

### **6. Relevant Hashtags**
* [List hashtags with # symbol]

### **7. Full Video Captions (for social media post)**
* [Provide a concise, engaging caption for the entire video, including a hook, brief description, and a call to action. Incorporate emojis where appropriate.]
---
Keep the overall script concise and engaging for a short video format (e.g., 60-90 seconds total)."#;

/// Render the prompt for one craft idea
pub fn build_prompt(idea: &CraftIdea) -> String {
    PROMPT_TEMPLATE.replacen(PLACEHOLDER, idea.as_str(), 1)
}
